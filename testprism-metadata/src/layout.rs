// Copyright (c) The testprism Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Declarative dashboard layout: pages, widgets, and data sources.
//!
//! The layout is fetched and rendered by external collaborators; this module
//! only defines the configuration contract. Widget `properties` carry the
//! strategy configuration (organization type, sort types, filter fields,
//! duration intervals) consumed by `testprism-core`'s registries.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A full dashboard layout.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    /// The pages of the dashboard.
    pub pages: Vec<Page>,

    /// The data sources referenced by widgets.
    pub data_sources: Vec<DataSource>,
}

/// One dashboard page with its widgets.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    /// The page title.
    pub title: String,

    /// The routing path of the page.
    pub path: String,

    /// The widgets rendered on this page.
    pub widgets: Vec<Widget>,
}

/// The kind of widget to render.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum WidgetType {
    /// A hierarchical test tree.
    #[serde(rename = "tree")]
    Tree,

    /// A pie chart of a test distribution.
    #[serde(rename = "distribution-pie")]
    DistributionPie,

    /// A summary of the analyzed report.
    #[serde(rename = "analysis-summary")]
    AnalysisSummary,
}

/// One widget instance on a page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Widget {
    /// A unique identifier for the widget within the layout.
    pub id: String,

    /// The kind of widget.
    #[serde(rename = "type")]
    pub widget_type: WidgetType,

    /// Widget-specific configuration (strategy types and parameters).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<serde_json::Value>,

    /// The data binding for this widget.
    pub data: WidgetData,
}

/// The data binding of a widget.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetData {
    /// The id of the data source to read from.
    pub data_source_id: String,

    /// An optional generic predicate over the source data, evaluated by an
    /// external collaborator. Carried opaquely here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<serde_json::Value>,
}

/// A remote data source serving report JSON.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSource {
    /// A unique identifier referenced by [`WidgetData::data_source_id`].
    pub id: String,

    /// The URL to fetch.
    pub url: String,

    /// Extra request headers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<BTreeMap<String, String>>,

    /// Extra query parameters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_params: Option<BTreeMap<String, String>>,
}
