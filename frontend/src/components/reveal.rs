use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

/// Where hidden content starts from before it is revealed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Motion {
    Rise,
    FromLeft,
    FromRight,
    Grow,
}

impl Motion {
    fn class(self) -> &'static str {
        match self {
            Motion::Rise => "reveal-rise",
            Motion::FromLeft => "reveal-left",
            Motion::FromRight => "reveal-right",
            Motion::Grow => "reveal-grow",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or(Motion::Rise)]
    pub motion: Motion,
    /// Stagger before the transition starts, once the element is in view.
    #[prop_or_default]
    pub delay_ms: u32,
    /// Reveal right after mounting instead of waiting for the element to be
    /// scrolled into view.
    #[prop_or_default]
    pub on_load: bool,
    #[prop_or_default]
    pub class: Classes,
}

// Content counts as visible once its top edge passes 90% of the viewport.
const VIEWPORT_THRESHOLD: f64 = 0.9;

fn is_in_viewport(node: &NodeRef) -> bool {
    let Some(element) = node.cast::<Element>() else {
        return false;
    };
    let Some(height) = web_sys::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
    else {
        return true;
    };
    let rect = element.get_bounding_client_rect();
    rect.top() < height * VIEWPORT_THRESHOLD && rect.bottom() > 0.0
}

#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let in_view = use_state_eq(|| false);
    let shown = use_state_eq(|| false);

    {
        let node = node.clone();
        let in_view = in_view.clone();
        let on_load = props.on_load;
        use_effect_with_deps(
            move |_| {
                let check = move || {
                    if on_load || is_in_viewport(&node) {
                        in_view.set(true);
                    }
                };
                check();

                let window = web_sys::window();
                let scroll_callback = Closure::wrap(Box::new(check) as Box<dyn FnMut()>);
                if let Some(window) = &window {
                    if window
                        .add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                        .is_err()
                    {
                        log::warn!("Could not watch scroll position for reveal animation");
                    }
                }

                move || {
                    if let Some(window) = window {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    {
        let shown = shown.clone();
        let delay = props.delay_ms;
        use_effect_with_deps(
            move |in_view| {
                let timeout = in_view.then(|| Timeout::new(delay, move || shown.set(true)));
                move || drop(timeout)
            },
            *in_view,
        );
    }

    html! {
        <div
            ref={node}
            class={classes!(
                "reveal",
                props.motion.class(),
                (*shown).then_some("revealed"),
                props.class.clone()
            )}
        >
            { for props.children.iter() }
        </div>
    }
}
