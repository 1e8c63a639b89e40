use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::i18n::{locales, set_lang, t};

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub on_lang_change: Callback<String>,
    pub current_lang: String,
}

#[function_component(Header)]
pub fn header(p: &Props) -> Html {
    let on_change = {
        let cb = p.on_lang_change.clone();
        Callback::from(move |e: Event| {
            if let Some(sel) = e.target_dyn_into::<HtmlSelectElement>() {
                set_lang(&sel.value());
                cb.emit(sel.value());
            }
        })
    };
    let current = p.current_lang.clone();
    html! {
        <header role="banner" class="page-header">
            <div class="header-copy">
                <h1 class="page-title">{ t("app.title") }</h1>
                <p class="page-tagline">{ t("app.tagline") }</p>
            </div>
            <nav aria-label={t("app.lang_label")} class="lang-switch">
                <label for="lang-select" class="sr-only">{ t("app.lang_label") }</label>
                <select id="lang-select" onchange={on_change} aria-label={t("app.lang_label")}>
                    { for locales().iter().map(|meta| html! {
                        <option value={meta.code} selected={current == meta.code}>{ meta.name }</option>
                    }) }
                </select>
            </nav>
        </header>
    }
}
