pub mod timekeeping;
