use leptos::prelude::*;

/// Application shell: a fixed filter sidebar and the scrolling content.
///
/// ```text
/// +-----------+------------------------------+
/// |  Sidebar  |          Content             |
/// |  (Left)   |          (Center)            |
/// +-----------+------------------------------+
/// ```
#[component]
pub fn Shell<L, C>(left: L, center: C) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="app-layout">
            <aside class="app-sidebar">{left()}</aside>
            <main class="app-main">{center()}</main>
        </div>
    }
}
