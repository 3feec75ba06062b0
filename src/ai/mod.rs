mod agent;
mod minimax;
mod random;

pub use agent::Agent;
pub use minimax::MinimaxAgent;
pub use random::RandomAgent;
