mod attendance_test;
mod auth_test;
mod employers_test;
mod health_test;
mod location_test;
mod students_test;
mod supervisors_test;
