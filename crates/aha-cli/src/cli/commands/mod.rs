mod dispatch;
mod init;
mod rubric;
mod score;
mod validate;

pub use dispatch::dispatch;
