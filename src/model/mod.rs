pub mod employee;
pub mod qr_code;
pub mod role;
pub mod schedule;
pub mod timekeeping;
