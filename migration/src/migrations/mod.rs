pub mod m202410010001_create_students;
pub mod m202410010002_create_employers;
pub mod m202410010003_create_supervisors;
pub mod m202410010004_create_attendance;
pub mod m202410010005_create_otps;
pub mod m202410010006_create_authorized_devices;
pub mod m202410010007_create_moods;
