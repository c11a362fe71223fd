use crate::product::ProductConfig;

#[derive(Clone)]
pub struct TestProduct;

impl ProductConfig for TestProduct {
    fn name(&self) -> &'static str {
        "taujs"
    }

    fn display_name(&self) -> &'static str {
        "create-taujs (test)"
    }

    fn docs_url(&self) -> &'static str {
        "https://example.com/docs"
    }
}
