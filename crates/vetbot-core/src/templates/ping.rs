use super::{Template, TemplateParam};

/// Template used by the custom-command ping sub-action.
pub fn ping_template() -> Template {
    Template::new(vec![
        TemplateParam {
            name: "member",
            description: "A mention of the person being vetted.",
        },
        TemplateParam {
            name: "mod",
            description: "A mention of the mod who did the vetting.",
        },
        TemplateParam {
            name: "channel",
            description: "A mention of the ping channel.",
        },
    ])
}

#[cfg(test)]
mod tests {
    use maplit::hashmap;

    use super::*;

    #[test]
    fn ping_template_params() {
        let template = ping_template();
        let names: Vec<_> = template.params().iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["member", "mod", "channel"]);
    }

    #[test]
    fn ping_template_expands_declared_params() {
        let template = ping_template();
        assert_eq!(template.validate("Welcome {member}, vetted by {MOD}!"), None);

        let values = hashmap! {
            "member" => "<@!1>".to_string(),
            "mod" => "<@!2>".to_string(),
            "channel" => "<#3>".to_string(),
        };
        assert_eq!(
            template.expand("Welcome {member} to {channel}!", &values),
            Ok("Welcome <@!1> to <#3>!".into())
        );
    }
}
