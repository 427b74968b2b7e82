use crate::domain::analysis::ports::LlmClient;

/// Generic service container over the system's ports. Concrete wiring lives
/// in [`crate::application`].
#[derive(Clone)]
pub struct Service<L>
where
    L: LlmClient,
{
    pub(crate) llm_client: L,
}

impl<L> Service<L>
where
    L: LlmClient,
{
    pub fn new(llm_client: L) -> Self {
        Self { llm_client }
    }
}
