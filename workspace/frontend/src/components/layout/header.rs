use stylist::css;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(Header)]
pub fn header() -> Html {
    let bar = css!(
        r#"
        background: #5636d3;
        padding: 30px 0;
    "#
    );
    let inner = css!(
        r#"
        width: 1120px;
        margin: 0 auto;
        padding: 0 20px 150px;
        display: flex;
        align-items: center;
        justify-content: space-between;

        a {
            color: #fff;
            text-decoration: none;
            font-size: 16px;
            transition: opacity 0.2s;
        }

        a:hover {
            opacity: 0.6;
        }
    "#
    );

    html! {
        <header class={bar}>
            <div class={inner}>
                <img src="assets/logo.svg" alt="GoFinances" />
                <nav>
                    <Link<Route> to={Route::Dashboard}>{"Listagem"}</Link<Route>>
                </nav>
            </div>
        </header>
    }
}
