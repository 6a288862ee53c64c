use crate::state::IndexSelector;

/// One search route / 搜索视图
///
/// The label doubles as the route path and is handed to the renderer so that
/// pagination and facet links point back to the same view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchView {
    /// View label and route path / 视图标签（即路由路径）
    pub label: &'static str,
    /// Solr core to query / 查询的索引
    pub index: IndexSelector,
    /// Request facet counts and apply `fk`/`fa` filters / 是否启用分面
    pub facets: bool,
    /// Query profile slot, resolved against `solr.profiles` / 查询配置槽
    pub profile: usize,
}

/// All search views, in landing-page order / 全部搜索视图
pub const SEARCH_VIEWS: &[SearchView] = &[
    SearchView { label: "search0", index: IndexSelector::Plain, facets: false, profile: 0 },
    SearchView { label: "search1", index: IndexSelector::Plain, facets: false, profile: 1 },
    SearchView { label: "search2", index: IndexSelector::Plain, facets: false, profile: 2 },
    SearchView { label: "search3", index: IndexSelector::Faceted, facets: true, profile: 1 },
    SearchView { label: "search4", index: IndexSelector::Faceted, facets: true, profile: 3 },
];

impl SearchView {
    pub fn path(&self) -> String {
        format!("/{}", self.label)
    }
}
