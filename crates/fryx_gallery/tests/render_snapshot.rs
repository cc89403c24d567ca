//! Rendered HTML snapshot tests.

use fryx_gallery::{
    props, ClientEmbed, Component, Element, Page, Props, RenderOptions, Value, CALL_CLIENT_SCRIPT_KEY,
    CHILDREN_KEY,
};

fn render(el: Element, options: &RenderOptions) -> String {
    let mut page = Page::new(options);
    el.render(&mut page).expect("render failed").to_string()
}

fn children(items: Vec<Value>) -> Value {
    Value::List(items)
}

/// `<button @click=({props.onClick})>{props.title}</button>` with a client script.
fn card() -> Component {
    Component::new("Card", |p: Props| {
        Ok(Element::tag(
            "button",
            props([
                (
                    CALL_CLIENT_SCRIPT_KEY,
                    Value::List(vec!["0000000000c0ffee".into(), Value::List(vec![])]),
                ),
                ("@click", p["onClick"].clone()),
                (CHILDREN_KEY, children(vec![p["title"].clone()])),
            ]),
        ))
    })
}

mod components {
    use super::*;

    #[test]
    fn forwarded_handler_on_child_root() {
        let card = card();
        let home = Component::new("Home", move |_| {
            Ok(Element::tag(
                "main",
                props([(
                    CHILDREN_KEY,
                    children(vec![Element::component(
                        card.clone(),
                        props([
                            ("title", "Hi".into()),
                            ("onClick", ClientEmbed::new(0).into()),
                        ]),
                    )
                    .into()]),
                )]),
            ))
        });
        let options = RenderOptions {
            app_name: Some("app".into()),
            ..RenderOptions::default()
        };
        let html = render(Element::component(home, Props::new()), &options);
        insta::assert_snapshot!(html, @r#"<main data-fryclass="app:Home" data-fryid="1"><button data-fryclass="app:Card" data-fryid="2" data-fryembed="1/0-event-click"><script src="/static/js/components/0000000000c0ffee.js" data-fryid="2"></script>Hi</button></main>"#);
    }

    #[test]
    fn component_as_root_of_component() {
        let card = card();
        let page = Component::new("Landing", move |_| {
            Ok(Element::component(
                card.clone(),
                props([
                    ("title", "Go".into()),
                    ("onClick", ClientEmbed::new(3).into()),
                ]),
            ))
        });
        let html = render(Element::component(page, Props::new()), &RenderOptions::default());
        insta::assert_snapshot!(html, @r#"<button data-fryclass="Landing Card" data-fryid="1 2" data-fryembed="1/3-event-click"><script src="/static/js/components/0000000000c0ffee.js" data-fryid="2"></script>Go</button>"#);
    }
}

mod tags {
    use super::*;

    #[test]
    fn text_embed_pass_through() {
        let counter = Component::new("Counter", |_| {
            Ok(Element::tag(
                "p",
                props([(
                    CHILDREN_KEY,
                    children(vec![
                        "Count: ".into(),
                        Element::tag(
                            "span",
                            props([
                                ("*", ClientEmbed::new(0).into()),
                                (CHILDREN_KEY, children(vec![0i64.into()])),
                            ]),
                        )
                        .into(),
                    ]),
                )]),
            ))
        });
        let html = render(Element::component(counter, Props::new()), &RenderOptions::default());
        insta::assert_snapshot!(html, @r#"<p data-fryclass="Counter" data-fryid="1">Count: <span data-fryembed="1/0-text">0</span></p>"#);
    }

    #[test]
    fn void_and_boolean_attributes() {
        let el = Element::tag(
            "form",
            props([(
                CHILDREN_KEY,
                children(vec![
                    Element::tag(
                        "input",
                        props([
                            ("name", "q".into()),
                            ("required", true.into()),
                            ("readonly", false.into()),
                        ]),
                    )
                    .into(),
                    children(vec![Element::tag("hr", Props::new()).into()]),
                ]),
            )]),
        );
        let html = render(el, &RenderOptions::default());
        insta::assert_snapshot!(html, @r#"<form><input name="q" required /><hr /></form>"#);
    }
}
