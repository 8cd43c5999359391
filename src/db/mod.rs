pub(crate) mod job_queries;
