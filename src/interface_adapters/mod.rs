// Interface adapters: concrete implementations of the domain ports over
// channels and structured logs.

pub mod console;
pub mod flow;
pub mod inputs;

pub use console::ConsoleOverlay;
pub use flow::{FlowSignal, RoundFlowChannel, SceneFlowChannel};
pub use inputs::{AxisHandle, AxisSample, InputRouter};
