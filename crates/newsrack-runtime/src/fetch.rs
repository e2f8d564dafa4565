use futures::future::BoxFuture;
use newsrack_types::{ContentPage, FetchError};

/// The injected remote-data capability.
///
/// The engine never constructs one of these; hosts hand one in (an HTTP
/// client, a file-backed feed, a scripted test double). Implementations are
/// expected to translate transport failures into `FetchError::Transport` and
/// shape problems into `FetchError::MalformedResponse`; they should not
/// retry internally, since the session surfaces a retry affordance itself.
pub trait PageFetcher {
    fn fetch_page(
        &self,
        offset: usize,
        limit: usize,
    ) -> BoxFuture<'_, std::result::Result<ContentPage, FetchError>>;
}
