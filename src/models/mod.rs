mod job;

pub use job::{CreateJob, Job, UpdateJob};
