//! Jobs of a workflow run from GitHub REST API.

use serde::Deserialize;

/// The job name that marks the deployment step of a run.
pub const DEPLOY_JOB_NAME: &str = "deploy";

/// Represents the job list of a workflow run from GitHub REST API.
#[derive(Debug, Deserialize, Clone)]
pub struct Jobs {
    /// How many jobs the run has in total.
    pub total_count: u64,
    /// The jobs, in the order the run executed them.
    pub jobs: Vec<Job>,
}

/// Represents a job from GitHub REST API.
#[derive(Debug, Deserialize, Clone)]
pub struct Job {
    pub id: u64,
    pub name: String,
}

/// Picks the job that performed the deployment: the one named
/// [`DEPLOY_JOB_NAME`] when present, the first job otherwise. Returns [`None`]
/// only for an empty list.
pub fn select_deploy_job(jobs: &[Job]) -> Option<&Job> {
    jobs.iter()
        .find(|job| job.name == DEPLOY_JOB_NAME)
        .or_else(|| jobs.first())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(id: u64, name: &str) -> Job {
        Job {
            id,
            name: String::from(name),
        }
    }

    #[test]
    fn prefers_the_deploy_job_regardless_of_position() {
        let jobs = [job(1, "build"), job(2, "test"), job(3, "deploy")];
        assert_eq!(select_deploy_job(&jobs).unwrap().id, 3);

        let jobs = [job(3, "deploy"), job(1, "build"), job(2, "test")];
        assert_eq!(select_deploy_job(&jobs).unwrap().id, 3);
    }

    #[test]
    fn falls_back_to_the_first_job() {
        let jobs = [job(7, "build"), job(8, "publish")];
        assert_eq!(select_deploy_job(&jobs).unwrap().id, 7);
    }

    #[test]
    fn selects_nothing_from_an_empty_list() {
        assert!(select_deploy_job(&[]).is_none());
    }

    #[test]
    fn deserializes_the_job_listing_payload() {
        let payload = r#"{
            "total_count": 2,
            "jobs": [
                {
                    "id": 399444496,
                    "run_id": 30433642,
                    "name": "build",
                    "status": "completed",
                    "conclusion": "success"
                },
                {
                    "id": 399444497,
                    "run_id": 30433642,
                    "name": "deploy",
                    "status": "completed",
                    "conclusion": "success"
                }
            ]
        }"#;

        let jobs: Jobs = serde_json::from_str(payload).unwrap();
        assert_eq!(jobs.total_count, 2);
        assert_eq!(jobs.jobs[1].name, DEPLOY_JOB_NAME);
    }
}
