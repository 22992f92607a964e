//! Project ranking by popularity

use crate::model::Project;
use std::cmp::Reverse;

/// Sort projects by star count, most starred first
///
/// The sort is stable: projects with equal star counts keep the order in
/// which they were fetched.
pub fn rank_projects(mut projects: Vec<Project>) -> Vec<Project> {
    projects.sort_by_key(|p| Reverse(p.stargazers_count));
    projects
}
