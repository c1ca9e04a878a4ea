use crate::domain::recipes::ports::{ImageClient, LlmClient};

/// Carries the injected AI client handles. Business logic is attached
/// through trait impls in the domain modules.
#[derive(Debug, Clone)]
pub struct Service<L, I>
where
    L: LlmClient,
    I: ImageClient,
{
    pub(crate) llm_client: L,
    pub(crate) image_client: I,
}

impl<L, I> Service<L, I>
where
    L: LlmClient,
    I: ImageClient,
{
    pub fn new(llm_client: L, image_client: I) -> Self {
        Self {
            llm_client,
            image_client,
        }
    }
}
