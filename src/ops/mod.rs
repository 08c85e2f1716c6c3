pub mod move_session;
pub mod projection;
pub mod reconcile;
pub mod todo_ops;
