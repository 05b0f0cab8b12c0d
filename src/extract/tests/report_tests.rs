use super::extract;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collects_report_with_panel_title() {
        let po = extract(
            r#"
            <div class="ibox">
              <div class="ibox-title">
                <p class="lkPanelHeaderText">Fallback title</p>
                <span data-testid="pnl-panel-title_pnltempProfiles">
                  Temporal   Allocation Profiles
                </span>
                <a class="nav-page-favorite-control" data-linkid="tempProfiles"></a>
              </div>
            </div>
            "#,
        );

        assert_eq!(po.reports.len(), 1);
        let report = &po.reports[0];
        assert_eq!(report.link_id, "tempProfiles");
        assert_eq!(report.title.as_deref(), Some("Temporal Allocation Profiles"));
        assert_eq!(report.description, None);
        assert_eq!(report.intercepted_url, "aLinkId=tempProfiles");
        assert_eq!(report.expected_iframe, "#lkDialogFrame");
    }

    #[test]
    fn test_falls_back_to_header_text_and_parent() {
        let po = extract(
            r#"
            <div class="panel">
              <p class="lkPanelHeaderText"> Emission Summary </p>
              <span data-testid="pnl-panel-title_empty">  </span>
              <a class="nav-page-favorite-control" data-linkid="emSummary"></a>
            </div>
            <section>
              <p class="lkPanelHeaderText">Loose Report</p>
              <a class="nav-page-favorite-control" data-linkid="loose"></a>
            </section>
            <div><a class="nav-page-favorite-control" data-linkid="orphan"></a></div>
            "#,
        );

        let titles: Vec<_> = po
            .reports
            .iter()
            .map(|r| (r.link_id.as_str(), r.title.as_deref()))
            .collect();
        assert_eq!(
            titles,
            vec![
                ("emSummary", Some("Emission Summary")),
                ("loose", Some("Loose Report")),
                ("orphan", None),
            ]
        );
    }

    #[test]
    fn test_dedup_by_link_id_keeps_first_title() {
        let po = extract(
            r#"
            <div class="card">
              <p class="lkPanelHeaderText">First</p>
              <a class="nav-page-favorite-control" data-linkid="dup"></a>
            </div>
            <div class="card">
              <p class="lkPanelHeaderText">Second</p>
              <a class="nav-page-favorite-control" data-linkid="dup"></a>
            </div>
            "#,
        );

        assert_eq!(po.reports.len(), 1);
        assert_eq!(po.reports[0].title.as_deref(), Some("First"));
    }

    #[test]
    fn test_skips_hidden_and_empty_link_ids() {
        let po = extract(
            r#"
            <div class="card">
              <a class="nav-page-favorite-control" data-linkid=""></a>
              <a class="nav-page-favorite-control" data-linkid="hidden" style="display:none"></a>
              <a class="other-control" data-linkid="wrongClass"></a>
            </div>
            "#,
        );
        assert!(po.reports.is_empty());
    }
}
