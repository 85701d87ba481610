pub mod input;

pub use input::InputView;
