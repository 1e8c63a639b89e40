use std::collections::BTreeMap;

use multibuy_core::{ChoiceKind, ChoiceSource, ProductOption};
use yew::prelude::*;

use super::super::handlers::ChoiceChange;
use super::super::state::PickerState;
use crate::i18n;

/// One selectable bundle box. Clicking anywhere on it (radio included)
/// activates it; clicks inside the chooser area are swallowed so a
/// dropdown interaction never flips the selection.
pub fn render_option_box(
    state: &UseStateHandle<PickerState>,
    option: &ProductOption,
    on_select: &Callback<u8>,
    on_choice: &Callback<ChoiceChange>,
) -> Html {
    let unit_count = option.unit_count;
    let selected = state.selection.is_active(unit_count);
    let unit_str = unit_count.to_string();
    let radio_id = format!("unit-{unit_count}");

    let title = i18n::tr("picker.option.title", Some(&{
        let mut vars = BTreeMap::new();
        vars.insert("count", unit_str.as_str());
        vars
    }));

    let savings = option.savings_pct();
    let savings_str = savings.to_string();
    let badge = (savings > 0).then(|| {
        let label = i18n::tr("picker.option.save", Some(&{
            let mut vars = BTreeMap::new();
            vars.insert("pct", savings_str.as_str());
            vars
        }));
        html! { <span class="savings-badge">{ label }</span> }
    });

    let original = (option.original_price_cents > option.price_cents).then(|| {
        html! {
            <span class="original-price">
                { i18n::fmt_currency(option.original_price_cents) }
            </span>
        }
    });

    let onclick = {
        let on_select = on_select.clone();
        Callback::from(move |_e: MouseEvent| on_select.emit(unit_count))
    };
    // radios also change on keyboard activation, not just clicks
    let onchange = {
        let on_select = on_select.clone();
        Callback::from(move |_e: Event| on_select.emit(unit_count))
    };

    let choosers = selected.then(|| render_chooser_rows(state, unit_count, on_choice));

    html! {
        <section
            class={classes!("product-box", selected.then_some("active"))}
            data-unit={unit_str.clone()}
            data-price={cents_to_decimal(option.price_cents)}
            {onclick}
        >
            <header class="product-box-header">
                <input
                    type="radio"
                    id={radio_id.clone()}
                    name="product"
                    value={unit_str}
                    checked={selected}
                    {onchange}
                />
                <label class="product-box-title" for={radio_id}>{ title }</label>
                { badge }
            </header>
            <div class="product-box-prices">
                <span class="price">{ i18n::fmt_currency(option.price_cents) }</span>
                { original }
            </div>
            { choosers }
        </section>
    }
}

/// Two-decimal attribute form of a cent price, e.g. `1000` -> `10.00`.
fn cents_to_decimal(cents: i64) -> String {
    format!("{}.{:02}", cents / 100, cents.unsigned_abs() % 100)
}

fn render_chooser_rows(
    state: &UseStateHandle<PickerState>,
    unit_count: u8,
    on_choice: &Callback<ChoiceChange>,
) -> Html {
    let suppress = Callback::from(|e: MouseEvent| e.stop_propagation());
    html! {
        <div class="item-options" onclick={suppress}>
            { for (1..=unit_count).map(|item| render_item_row(state, unit_count, item, on_choice)) }
        </div>
    }
}

fn render_item_row(
    state: &UseStateHandle<PickerState>,
    unit_count: u8,
    item: u8,
    on_choice: &Callback<ChoiceChange>,
) -> Html {
    let item_str = item.to_string();
    let label = i18n::tr("picker.item", Some(&{
        let mut vars = BTreeMap::new();
        vars.insert("index", item_str.as_str());
        vars
    }));
    html! {
        <div class="item-row" data-item={item_str}>
            <span class="item-label">{ label }</span>
            { render_chooser(state, unit_count, item, ChoiceKind::Size, on_choice) }
            { render_chooser(state, unit_count, item, ChoiceKind::Colour, on_choice) }
        </div>
    }
}

fn render_chooser(
    state: &UseStateHandle<PickerState>,
    unit_count: u8,
    item: u8,
    kind: ChoiceKind,
    on_choice: &Callback<ChoiceChange>,
) -> Html {
    let offered = state.offered(kind);
    if offered.is_empty() {
        return Html::default();
    }
    let current = state.choice_of(kind, unit_count, item).unwrap_or_default();
    let select_id = format!("{}-{unit_count}-{item}", kind.as_str());
    let label_key = match kind {
        ChoiceKind::Size => "picker.size",
        ChoiceKind::Colour => "picker.colour",
    };

    let onchange = {
        let on_choice = on_choice.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<web_sys::HtmlSelectElement>() {
                on_choice.emit(ChoiceChange {
                    unit_count,
                    item,
                    kind,
                    value: select.value(),
                });
            }
        })
    };

    html! {
        <div class="custom-dropdown">
            <label class="dropdown-label" for={select_id.clone()}>{ i18n::t(label_key) }</label>
            <select
                id={select_id}
                data-unit={unit_count.to_string()}
                data-item={item.to_string()}
                data-type={kind.as_str()}
                {onchange}
            >
                { for offered.iter().map(|choice| html! {
                    <option value={choice.clone()} selected={*choice == current}>
                        { choice.clone() }
                    </option>
                }) }
            </select>
        </div>
    }
}
