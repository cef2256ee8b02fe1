pub mod center;
pub mod global_context;
pub mod left;
pub mod panels;
pub mod responsive;
pub mod right;
pub mod shortcuts;
pub mod top_header;

use global_context::use_global_context;
use leptos::prelude::*;
use top_header::TopHeader;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                   |
/// +------------------------------------------+
/// | Documents |      Chat       |  Evidence  |
/// |  (Left)   |    (Center)     |  (Right)   |
/// +------------------------------------------+
/// ```
///
/// At or below the mobile breakpoint the three zones stack vertically.
#[component]
pub fn Shell<L, C, R>(left: L, center: C, right: R) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
    R: Fn() -> AnyView + 'static + Send,
{
    let ctx = use_global_context();

    view! {
        <div class="app-layout" style="display: flex; flex-direction: column; height: 100vh;">
            <TopHeader />

            <div
                class="app-body"
                style:display="flex"
                style:flex="1"
                style:min-height="0"
                style:flex-direction=move || ctx.layout_mode().flex_direction()
            >
                <left::Left>
                    {left()}
                </left::Left>

                <center::Center>
                    {center()}
                </center::Center>

                <right::Right>
                    {right()}
                </right::Right>
            </div>
        </div>
    }
}
