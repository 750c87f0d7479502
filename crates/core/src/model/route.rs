use crate::model::StepId;

/// Navigation targets the flow asks the router for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlowRoute {
    Entry,
    Step(StepId),
    Dashboard,
}

impl FlowRoute {
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Entry => "/".to_owned(),
            Self::Step(id) => format!("/step/{id}"),
            Self::Dashboard => "/dashboard".to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_match_router_table() {
        assert_eq!(FlowRoute::Entry.path(), "/");
        assert_eq!(FlowRoute::Step(StepId::new(2)).path(), "/step/2");
        assert_eq!(FlowRoute::Dashboard.path(), "/dashboard");
    }
}
