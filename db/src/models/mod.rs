pub mod attendance;
pub mod authorized_device;
pub mod employer;
pub mod mood;
pub mod otp;
pub mod student;
pub mod supervisor;

pub use attendance::Entity as Attendance;
pub use authorized_device::Entity as AuthorizedDevice;
pub use employer::Entity as Employer;
pub use mood::Entity as Mood;
pub use otp::Entity as Otp;
pub use student::Entity as Student;
pub use supervisor::Entity as Supervisor;
