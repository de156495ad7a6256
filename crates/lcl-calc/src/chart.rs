//! 產量比較圖資料準備（只產生數列，不負責繪製）

use lcl_core::ProductionMode;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ProductionBreakdown;

/// 單一生產模式的數列
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub mode_name: String,

    /// 與 [`ProductionChart::labels`] 一一對應
    pub values: Vec<Decimal>,
}

/// 依產品與生產模式分組的產量比較
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionChart {
    /// 產品名稱（依對帳結果順序）
    pub labels: Vec<String>,
    pub series: Vec<ChartSeries>,
}

impl ProductionChart {
    /// 每個生產模式一組數列，產品沒有該模式產量時為 0
    pub fn from_breakdowns(breakdowns: &[ProductionBreakdown], modes: &[ProductionMode]) -> Self {
        let labels = breakdowns.iter().map(|b| b.product_name.clone()).collect();

        let series = modes
            .iter()
            .map(|mode| ChartSeries {
                mode_name: mode.name.clone(),
                values: breakdowns
                    .iter()
                    .map(|b| b.quantity_for_mode(&mode.name))
                    .collect(),
            })
            .collect();

        Self { labels, series }
    }

    pub fn series_for(&self, mode_name: &str) -> Option<&ChartSeries> {
        self.series.iter().find(|s| s.mode_name == mode_name)
    }

    /// 圖表縱軸上限
    pub fn max_value(&self) -> Decimal {
        self.series
            .iter()
            .flat_map(|s| s.values.iter().copied())
            .max()
            .unwrap_or(Decimal::ZERO)
    }
}
