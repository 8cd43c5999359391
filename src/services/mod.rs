pub(crate) mod job_service;
