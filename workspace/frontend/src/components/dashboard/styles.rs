use stylist::{css, StyleSource};

pub fn container() -> StyleSource {
    css!(
        r#"
        width: 100%;
        max-width: 1120px;
        margin: 0 auto;
        padding: 40px 20px;
    "#
    )
}

pub fn card_container() -> StyleSource {
    css!(
        r#"
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        grid-gap: 32px;
        margin-top: -150px;
    "#
    )
}

/// The total card is highlighted.
pub fn card(total: bool) -> StyleSource {
    let (background, color) = if total { ("#ff872c", "#fff") } else { ("#fff", "#363f5f") };

    css!(
        r#"
        background: ${background};
        padding: 22px 32px;
        border-radius: 5px;
        color: ${color};

        header {
            display: flex;
            align-items: center;
            justify-content: space-between;
        }

        header p {
            font-size: 16px;
        }

        h1 {
            margin-top: 14px;
            font-size: 36px;
            font-weight: normal;
            line-height: 54px;
        }
    "#,
        background = background,
        color = color
    )
}

pub fn table_container() -> StyleSource {
    css!(
        r#"
        margin-top: 64px;

        table {
            width: 100%;
            border-spacing: 0 8px;
        }

        th {
            color: #969cb3;
            font-weight: normal;
            padding: 20px 32px;
            text-align: left;
            font-size: 16px;
            line-height: 24px;
        }

        td {
            padding: 20px 32px;
            border: 0;
            background: #fff;
            font-size: 16px;
            font-weight: normal;
            color: #969cb3;
        }

        td.title {
            color: #363f5f;
        }

        td.income {
            color: #12a454;
        }

        td.outcome {
            color: #e83f5b;
        }

        td:first-child {
            border-radius: 8px 0 0 8px;
        }

        td:last-child {
            border-radius: 0 8px 8px 0;
        }
    "#
    )
}
