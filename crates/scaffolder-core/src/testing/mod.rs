mod fake_runner;
mod scripted_ui;
mod test_product;

pub use fake_runner::FakeRunner;
pub use scripted_ui::{Answer, ScriptedUi};
pub use test_product::TestProduct;
