use stylist::{css, Style};

pub fn container_style() -> Style {
    Style::new(css!(r#"
        display: flex;
        flex-direction: column;
        align-items: center;
        min-height: 100vh;
        padding: 2em 1em;
        box-sizing: border-box;
        background: #1b1e24;
        color: #e8e8e8;
        font-family: system-ui, sans-serif;
    "#)).expect("Error creating style")
}

pub fn header_style() -> Style {
    Style::new(css!(r#"
        font-size: 1.6em;
        font-weight: bold;
        margin-bottom: 0.5em;
        text-align: center;
    "#)).expect("Error creating style")
}

pub fn paragraph_style() -> Style {
    Style::new(css!(r#"
        max-width: 40em;
        margin-bottom: 0.75em;
        text-align: center;
        color: #b8bcc4;
    "#)).expect("Error creating style")
}

pub fn error_text_style() -> Style {
    Style::new(css!(r#"
        color: #ff6b6b;
        margin-bottom: 1em;
        text-align: center;
    "#)).expect("Error creating style")
}

pub fn status_text_style() -> Style {
    Style::new(css!(r#"
        color: #9aa3ad;
        font-size: 0.9em;
        margin-top: 0.5em;
    "#)).expect("Error creating style")
}

pub fn top_bar_style() -> Style {
    Style::new(css!(r#"
        display: flex;
        flex-direction: row;
        align-items: center;
        justify-content: space-between;
        width: 100%;
        max-width: 46em;
        margin-bottom: 1em;
    "#)).expect("Error creating style")
}

pub fn transcript_style() -> Style {
    Style::new(css!(r#"
        display: flex;
        flex-direction: column;
        gap: 0.6em;
        width: 100%;
        max-width: 46em;
        flex: 1 1 auto;
        overflow-y: auto;
        padding: 1em;
        border-radius: 8px;
        background: rgba(255,255,255,0.04);
    "#)).expect("Error creating style")
}

pub fn message_user_style() -> Style {
    Style::new(css!(r#"
        align-self: flex-end;
        max-width: 80%;
        padding: 0.5em 0.9em;
        border-radius: 12px 12px 2px 12px;
        background: #2d5c8f;
        white-space: pre-wrap;
    "#)).expect("Error creating style")
}

pub fn message_assistant_style() -> Style {
    Style::new(css!(r#"
        align-self: flex-start;
        max-width: 80%;
        padding: 0.5em 0.9em;
        border-radius: 12px 12px 12px 2px;
        background: #343a45;
        white-space: pre-wrap;
    "#)).expect("Error creating style")
}

pub fn input_row_style() -> Style {
    Style::new(css!(r#"
        display: flex;
        flex-direction: row;
        align-items: center;
        gap: 0.5em;
        width: 100%;
        max-width: 46em;
        margin-top: 1em;
    "#)).expect("Error creating style")
}

pub fn text_input_style() -> Style {
    Style::new(css!(r#"
        flex: 1 1 auto;
        padding: 0.6em 0.8em;
        border-radius: 6px;
        border: 1px solid #3c424d;
        background: #262a32;
        color: inherit;
        outline: none;

        &:focus {
            border-color: #5a80a8;
        }
    "#)).expect("Error creating style")
}

pub fn icon_style() -> Style {
    Style::new(css!(r#"
        cursor: pointer;
        color: #b8bcc4;

        &:hover {
            color: #ffffff;
        }
    "#)).expect("Error creating style")
}
