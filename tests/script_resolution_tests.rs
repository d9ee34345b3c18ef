use highcharts_rs::ChartError;
use highcharts_rs::api::{ChartKind, HighchartsChart, LibraryConfig, ScriptSource};
use proptest::prelude::*;

const CHART_URL: &str = "https://code.highcharts.com/highcharts.js";

fn extra_url(key: &str) -> String {
    format!("/js/modules/{key}.js")
}

fn registry_case() -> impl Strategy<Value = (Vec<String>, Vec<String>)> {
    prop::collection::btree_set("[a-z]{1,6}", 1..8)
        .prop_map(|keys| keys.into_iter().collect::<Vec<_>>())
        .prop_shuffle()
        .prop_flat_map(|registered| {
            let len = registered.len();
            (
                Just(registered.clone()),
                prop::sample::subsequence(registered, 1..=len).prop_shuffle(),
            )
        })
}

proptest! {
    #[test]
    fn extras_follow_registration_order_regardless_of_call_order(
        (registered, selected) in registry_case(),
        include_first in any::<bool>()
    ) {
        let mut chart = HighchartsChart::default();
        if include_first {
            chart.include_extra_scripts(selected.clone());
        }
        for key in &registered {
            chart.add_extra_script(key.as_str(), "/js/modules/", format!("{key}.js"));
        }
        if !include_first {
            chart.include_extra_scripts(selected.clone());
        }

        let urls = chart.resolve_script_urls().expect("every selected key is registered");

        let mut expected = vec![CHART_URL.to_owned()];
        expected.extend(
            registered
                .iter()
                .filter(|key| selected.contains(key))
                .map(|key| extra_url(key)),
        );
        prop_assert_eq!(&urls, &expected);
        prop_assert_eq!(urls.iter().filter(|url| url.as_str() == CHART_URL).count(), 1);
    }
}

#[test]
fn include_without_keys_selects_every_registered_script() {
    let mut chart = HighchartsChart::default();
    chart.add_extra_script("a", "/js/modules/", "a.js");
    chart.add_extra_script("b", "/js/modules/", "b.js");
    chart.include_extra_scripts(Vec::<&str>::new());

    assert_eq!(
        chart.resolve_script_urls().expect("resolve"),
        vec![CHART_URL.to_owned(), extra_url("a"), extra_url("b")]
    );
}

#[test]
fn unregistered_key_is_reported() {
    let mut chart = HighchartsChart::default();
    chart.add_extra_script("exporting", "/js/modules/", "exporting.js");
    chart.include_extra_scripts(["exporting", "drilldown"]);

    let err = chart.resolve_script_urls().expect_err("drilldown is unknown");
    assert_eq!(
        err,
        ChartError::UnknownScriptKey {
            key: "drilldown".to_owned()
        }
    );
    assert_eq!(
        err.to_string(),
        "extra script `drilldown` was included but never registered"
    );
}

#[test]
fn stock_chart_loads_highstock_bundle() {
    let chart = HighchartsChart::new(ChartKind::StockChart).with_library_config(
        LibraryConfig::default()
            .with_highstock(ScriptSource::new("lib/highstock/", "highstock.src.js")),
    );
    assert_eq!(
        chart.resolve_script_urls().expect("resolve"),
        vec!["lib/highstock/highstock.src.js".to_owned()]
    );
}

#[test]
fn script_tags_list_every_url_in_order() {
    let mut chart = HighchartsChart::new(ChartKind::MapChart)
        .with_library_config(LibraryConfig::with_base_url("/static/hc"));
    chart.add_extra_script("world", "/static/maps/", "world.js");
    chart.include_extra_scripts(["world"]);

    assert_eq!(
        chart.script_tags().expect("tags"),
        concat!(
            r#"<script type="text/javascript" src="/static/hc/maps/highmaps.js"></script>"#,
            "\n",
            r#"<script type="text/javascript" src="/static/maps/world.js"></script>"#,
        )
    );
}
