pub mod day;
pub mod read;
pub mod reflect;
pub mod settings;
pub mod upcoming;
