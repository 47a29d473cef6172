use crate::api::{query_pairs, ApiError};
use serde::Serialize;
use std::collections::{BTreeSet, HashMap};
use std::fmt;

/// Resource families a cached query can belong to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Family {
    Users,
    User,
    CurrentUser,
    Candidates,
    Candidate,
    DashboardStats,
    Funnel,
    TimeToHire,
    ImportJob,
    Interviews,
    Interview,
    CandidateProgress,
    InterviewerSchedule,
    UpcomingRounds,
    Scores,
    Score,
    Company,
}

impl Family {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Family::Users => "users",
            Family::User => "user",
            Family::CurrentUser => "current-user",
            Family::Candidates => "candidates",
            Family::Candidate => "candidate",
            Family::DashboardStats => "dashboard-stats",
            Family::Funnel => "funnel-analytics",
            Family::TimeToHire => "time-to-hire",
            Family::ImportJob => "import-job",
            Family::Interviews => "interviews",
            Family::Interview => "interview",
            Family::CandidateProgress => "candidate-progress",
            Family::InterviewerSchedule => "interviewer-schedule",
            Family::UpcomingRounds => "upcoming-rounds",
            Family::Scores => "scores",
            Family::Score => "score",
            Family::Company => "company",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cache key: a family plus the canonical form of the call parameters.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct QueryKey {
    pub family: Family,
    pub params: String,
}

impl QueryKey {
    #[must_use]
    pub fn new(family: Family) -> Self {
        Self {
            family,
            params: String::new(),
        }
    }

    #[must_use]
    pub fn with_id(family: Family, id: &str) -> Self {
        Self {
            family,
            params: id.trim().to_string(),
        }
    }

    /// Keys a query by its parameter struct. Unset fields are dropped and
    /// keys sorted, so equal parameters always produce equal keys.
    ///
    /// # Errors
    /// Returns `ApiError::Config` if the parameters do not form a flat object.
    pub fn with_params<P: Serialize + ?Sized>(family: Family, params: &P) -> Result<Self, ApiError> {
        let params = query_pairs(params)?
            .into_iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join("&");
        Ok(Self { family, params })
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.params.is_empty() {
            write!(f, "{}", self.family)
        } else {
            write!(f, "{}?{}", self.family, self.params)
        }
    }
}

/// Declared dependencies between a mutated family and the cached families
/// it makes stale. A mutation always invalidates its own family.
#[derive(Clone, Debug)]
pub struct InvalidationGraph {
    edges: HashMap<Family, BTreeSet<Family>>,
}

impl InvalidationGraph {
    /// Graph with no edges beyond each family invalidating itself.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            edges: HashMap::new(),
        }
    }

    /// Declares that a mutation on `from` makes `to` stale.
    #[must_use]
    pub fn declare(mut self, from: Family, to: Family) -> Self {
        self.edges.entry(from).or_default().insert(to);
        self
    }

    /// Families invalidated by a successful mutation on `family`.
    #[must_use]
    pub fn affected(&self, family: Family) -> BTreeSet<Family> {
        let mut affected = self.edges.get(&family).cloned().unwrap_or_default();
        affected.insert(family);
        affected
    }
}

impl Default for InvalidationGraph {
    /// List mutations invalidate the list and detail keys of the same
    /// resource; interview mutations also make upcoming rounds stale.
    /// Dashboard and analytics keys are not touched unless declared.
    fn default() -> Self {
        Self::empty()
            .declare(Family::Users, Family::User)
            .declare(Family::Candidates, Family::Candidate)
            .declare(Family::Interviews, Family::Interview)
            .declare(Family::Interviews, Family::UpcomingRounds)
            .declare(Family::Scores, Family::Score)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Params {
        skip: u64,
        limit: u64,
        status: Option<&'static str>,
    }

    #[test]
    fn keys_are_canonical() {
        let a = QueryKey::with_params(
            Family::Candidates,
            &Params {
                skip: 0,
                limit: 20,
                status: None,
            },
        )
        .unwrap();
        assert_eq!(a.to_string(), "candidates?limit=20&skip=0");

        let b = QueryKey::with_params(
            Family::Candidates,
            &Params {
                skip: 0,
                limit: 20,
                status: Some("hired"),
            },
        )
        .unwrap();
        assert_ne!(a, b);
        assert_eq!(QueryKey::with_id(Family::Candidate, " c-1 ").to_string(), "candidate?c-1");
        assert_eq!(QueryKey::new(Family::DashboardStats).to_string(), "dashboard-stats");
    }

    #[test]
    fn default_graph_keeps_dashboard_separate() {
        let graph = InvalidationGraph::default();
        let affected = graph.affected(Family::Candidates);
        assert!(affected.contains(&Family::Candidates));
        assert!(affected.contains(&Family::Candidate));
        assert!(!affected.contains(&Family::DashboardStats));

        let affected = graph.affected(Family::Interviews);
        assert!(affected.contains(&Family::UpcomingRounds));

        assert_eq!(
            graph.affected(Family::Company),
            BTreeSet::from([Family::Company])
        );
    }

    #[test]
    fn declared_edges_extend_invalidation() {
        let graph = InvalidationGraph::default()
            .declare(Family::Candidates, Family::DashboardStats)
            .declare(Family::Candidates, Family::Funnel);
        let affected = graph.affected(Family::Candidates);
        assert!(affected.contains(&Family::DashboardStats));
        assert!(affected.contains(&Family::Funnel));
        assert!(!affected.contains(&Family::TimeToHire));
    }
}
