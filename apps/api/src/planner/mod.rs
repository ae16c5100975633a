// Career path planner and goal tracking.
// Plans are owned by the client: each request carries the current list and the
// response returns the derived or updated view.

pub mod goals;
pub mod handlers;
pub mod milestones;

pub use goals::{default_goals, filter_goals, goal_stats};
pub use milestones::{
    add_milestone, default_milestones, progress, suggest_milestones, Milestone, MilestoneDraft,
    PlanProgress,
};
