use super::extract;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collects_fields_with_id_or_test_id() {
        let po = extract(
            r#"
            <form>
              <input id="username" />
              <input data-testid="password" type="password"/>
              <select data-testid="country"></select>
              <textarea id="notes"></textarea>
              <input type="checkbox"/>
            </form>
            "#,
        );

        let ids: Vec<_> = po
            .form_fields
            .iter()
            .map(|f| f.id.as_deref().or(f.data_test_id.as_deref()))
            .collect();
        assert_eq!(
            ids,
            vec![Some("username"), Some("password"), Some("country"), Some("notes")]
        );

        let types: Vec<_> = po.form_fields.iter().map(|f| f.field_type.as_str()).collect();
        assert_eq!(types, vec!["input", "password", "select", "textarea"]);
    }

    #[test]
    fn test_description_priority() {
        let po = extract(
            r#"
            <input id="a" name="userName" placeholder="User name"/>
            <input id="b" placeholder="Search reports"/>
            <input id="c"/>
            <input data-testid="d"/>
            "#,
        );

        let descriptions: Vec<_> = po.form_fields.iter().map(|f| f.description.as_str()).collect();
        assert_eq!(descriptions, vec!["userName", "Search reports", "c", "d"]);
        assert_eq!(po.form_fields[0].placeholder.as_deref(), Some("User name"));
        assert!(po.form_fields.iter().all(|f| f.fallback_selector.is_none()));
    }

    #[test]
    fn test_type_is_lower_cased() {
        let po = extract(r#"<input id="when" type="DATE"/><input id="blank" type=""/>"#);
        assert_eq!(po.form_fields[0].field_type, "date");
        assert_eq!(po.form_fields[1].field_type, "input");
    }

    #[test]
    fn test_hidden_fields_and_empty_ids_excluded() {
        let po = extract(
            r#"
            <input id="gone" style="display:none"/>
            <input id="" data-testid=""/>
            <input id="kept"/>
            "#,
        );
        assert_eq!(po.form_fields.len(), 1);
        assert_eq!(po.form_fields[0].id.as_deref(), Some("kept"));
    }
}
