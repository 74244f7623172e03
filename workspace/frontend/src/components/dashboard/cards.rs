use std::rc::Rc;

use common::{BalanceCard, FormattedBalance};
use yew::prelude::*;

use super::styles;

#[derive(Properties, PartialEq)]
pub struct SummaryCardProps {
    pub card: BalanceCard,
    pub value: AttrValue,
}

#[function_component(SummaryCard)]
pub fn summary_card(props: &SummaryCardProps) -> Html {
    let card = props.card;

    html! {
        <div class={styles::card(card.is_total())}>
            <header>
                <p>{card.label()}</p>
                <img src={card.icon()} alt={card.alt()} />
            </header>
            <h1 data-testid={card.test_id()}>{props.value.clone()}</h1>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SummaryCardsProps {
    pub balance: Rc<FormattedBalance>,
}

/// Income, outcome and total cards, always in that order.
#[function_component(SummaryCards)]
pub fn summary_cards(props: &SummaryCardsProps) -> Html {
    html! {
        <section class={styles::card_container()}>
            { for BalanceCard::ALL.iter().map(|card| html! {
                <SummaryCard
                    key={card.test_id()}
                    card={*card}
                    value={AttrValue::from(props.balance.get(*card).to_string())}
                />
            })}
        </section>
    }
}
