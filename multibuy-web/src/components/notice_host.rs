//! Transient message element appended to the page container.
//!
//! The host walks each notice through Entering -> Visible -> Leaving on
//! one-shot timers and then asks the owner to drop it. Superseding a
//! notice cancels the pending timers of the old one via the effect
//! cleanup, and the dismissal callback carries the notice id so a stale
//! firing can be recognized and ignored by the owner.

use multibuy_core::{Notice, NoticePhase, NoticeSchedule};
use yew::prelude::*;

#[cfg(target_arch = "wasm32")]
use crate::dom;

#[derive(Properties, PartialEq)]
pub struct NoticeHostProps {
    /// The one current notice, if any.
    pub notice: Option<Notice>,
    /// Raised with the notice id once its fade-out has finished.
    #[prop_or_default]
    pub on_dismissed: Callback<u64>,
}

#[cfg(target_arch = "wasm32")]
fn ms(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

#[function_component(NoticeHost)]
pub fn notice_host(props: &NoticeHostProps) -> Html {
    let phase = use_state(NoticePhase::default);

    {
        let phase = phase.clone();
        let on_dismissed = props.on_dismissed.clone();
        let key = props.notice.as_ref().map(|notice| (notice.id, notice.severity));
        use_effect_with(key, move |key| {
            #[cfg(target_arch = "wasm32")]
            let mut pending: Vec<i32> = Vec::new();
            if let Some((id, severity)) = *key {
                phase.set(NoticePhase::Entering);
                let schedule = NoticeSchedule::for_severity(severity);
                #[cfg(target_arch = "wasm32")]
                {
                    let enter = {
                        let phase = phase.clone();
                        dom::schedule_timeout(ms(schedule.enter_ms), move || {
                            phase.set(NoticePhase::Visible);
                        })
                    };
                    let fade = {
                        let phase = phase.clone();
                        dom::schedule_timeout(ms(schedule.fade_ms), move || {
                            phase.set(NoticePhase::Leaving);
                        })
                    };
                    let remove = dom::schedule_timeout(ms(schedule.remove_ms), move || {
                        on_dismissed.emit(id);
                    });
                    pending.extend([enter, fade, remove].into_iter().flatten());
                }
                #[cfg(not(target_arch = "wasm32"))]
                let _ = (id, schedule, &on_dismissed);
            }
            move || {
                #[cfg(target_arch = "wasm32")]
                for handle in pending {
                    dom::cancel_timeout(handle);
                }
            }
        });
    }

    let Some(notice) = props.notice.as_ref() else {
        return Html::default();
    };

    let class = classes!(
        "cart-message",
        format!("cart-message-{}", notice.severity.css_suffix()),
        phase.is_shown().then_some("show"),
    );

    html! {
        <div {class} data-notice-id={notice.id.to_string()}>
            { notice.message.clone() }
        </div>
    }
}
