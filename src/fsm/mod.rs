pub mod engine_fsm;
pub mod engine_states;

pub use engine_fsm::EngineFSM;
pub use engine_states::EngineState;
