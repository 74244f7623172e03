use stylist::css;
use stylist::yew::Global;
use yew::prelude::*;
use super::Header;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub children: Children,
}

#[function_component(Layout)]
pub fn layout(props: &Props) -> Html {
    html! {
        <>
            <Global css={css!(r#"
                * {
                    margin: 0;
                    padding: 0;
                    outline: 0;
                    box-sizing: border-box;
                }

                body {
                    background: #f0f2f5;
                    -webkit-font-smoothing: antialiased;
                }

                body, input, button {
                    font: 16px "Poppins", sans-serif;
                }
            "#)} />
            <Header />
            { for props.children.iter() }
        </>
    }
}
