use yew::{BaseComponent, ServerRenderer};

/// Renders `C` to a plain HTML string, without hydration markers.
pub async fn render_html<C, F>(props: F) -> String
where
    C: BaseComponent,
    F: FnOnce() -> C::Properties + Send + 'static,
{
    ServerRenderer::<C>::with_props(props)
        .hydratable(false)
        .render()
        .await
}
