use std::rc::Rc;

use common::TransactionRow;
use yew::prelude::*;

use super::styles;

#[derive(Properties, PartialEq)]
pub struct TransactionTableProps {
    pub rows: Rc<Vec<TransactionRow>>,
}

#[function_component(TransactionTable)]
pub fn transaction_table(props: &TransactionTableProps) -> Html {
    html! {
        <section class={styles::table_container()}>
            <table>
                <thead>
                    <tr>
                        <th>{"Título"}</th>
                        <th>{"Preço"}</th>
                        <th>{"Categoria"}</th>
                        <th>{"Data"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for props.rows.iter().map(|row| html! {
                        <tr key={row.id.clone()}>
                            <td class="title">{&row.title}</td>
                            <td class={row.kind.css_class()}>{row.display_value()}</td>
                            <td>{&row.category_title}</td>
                            <td>{&row.formatted_date}</td>
                        </tr>
                    })}
                </tbody>
            </table>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::TransactionType;

    fn row(id: &str, title: &str, kind: TransactionType, value: &str) -> TransactionRow {
        TransactionRow {
            id: id.to_string(),
            title: title.to_string(),
            kind,
            category_title: "Job".to_string(),
            formatted_value: value.to_string(),
            formatted_date: "01/10/2024".to_string(),
        }
    }

    async fn render(rows: Vec<TransactionRow>) -> String {
        yew::ServerRenderer::<TransactionTable>::with_props(move || TransactionTableProps {
            rows: Rc::new(rows),
        })
        .hydratable(false)
        .render()
        .await
    }

    #[tokio::test]
    async fn test_one_table_row_per_transaction() {
        let rendered = render(vec![
            row("1", "Salary", TransactionType::Income, "$5,000.00"),
            row("2", "Rent", TransactionType::Outcome, "$1,200.00"),
        ])
        .await;

        assert_eq!(rendered.matches(r#"class="title""#).count(), 2);
        assert!(rendered.contains(r#"class="income">$5,000.00</td>"#));
        assert!(rendered.contains(r#"class="outcome">- $1,200.00</td>"#));
        assert!(rendered.find("Salary") < rendered.find("Rent"));
    }

    #[tokio::test]
    async fn test_empty_table_keeps_headers() {
        let rendered = render(Vec::new()).await;

        assert_eq!(rendered.matches(r#"class="title""#).count(), 0);
        for header in ["Título", "Preço", "Categoria", "Data"] {
            assert!(rendered.contains(header));
        }
    }
}
