use serde_json::{Value, json};
use twdata_core::FetchRequest;

use super::{TPEX_DAY, in_range};

/// What TPEx returns for a day or range without data.
fn no_data() -> Value {
    json!({ "stat": "ok", "tables": [{ "title": "", "totalCount": 0, "data": [], "summary": [] }] })
}

fn table(rows: Value) -> Value {
    let count = rows.as_array().map_or(0, Vec::len);
    json!({
        "stat": "ok",
        "date": TPEX_DAY.replace('/', ""),
        "tables": [{ "totalCount": count, "data": rows, "summary": [] }]
    })
}

/// Fixture body for a TPEx endpoint, or `None` when the endpoint is not a
/// TPEx one.
pub(crate) fn respond(req: &FetchRequest) -> Option<Value> {
    let on_day = req.param_value("date") == Some(TPEX_DAY);
    let ranged = in_range(req, TPEX_DAY);

    let body = match req.endpoint() {
        "dailyQuotes" if on_day => daily_quotes(),
        "dailyTrade" if on_day => daily_trade(),
        "balance" if on_day => balance(),
        "sbl" if on_day => sbl(),
        "sectRatio" if on_day => sect_ratio(),
        "sectinx" if on_day => sectinx(),
        "marketStats" if on_day => market_stats(),
        "peQryDate" if on_day => pe_qry_date(),
        "summary" if on_day => insti_summary(),
        "highlight" if on_day => highlight(),
        "exDailyQ" if ranged => ex_daily_q(),
        "revivt" if ranged => revivt(),
        "pvChgRslt" if ranged => pv_chg_rslt(),
        "etfSplitRslt" if ranged => etf_split_rslt(),
        "etfRvsRslt" if ranged => etf_rvs_rslt(),
        "etfSplit" => etf_split(),
        "etfRvs" => etf_rvs(),
        "prePost" => pre_post(),
        "decap" => decap(),
        "pvChgAnn" => pv_chg_ann(),
        "applicant" => match req.param_value("date") {
            None | Some("ALL" | "2023") => applicant(),
            Some(_) => no_data(),
        },
        "dailyQuotes" | "dailyTrade" | "balance" | "sbl" | "sectRatio" | "sectinx"
        | "marketStats" | "peQryDate" | "summary" | "exDailyQ" | "revivt" | "pvChgRslt"
        | "etfSplitRslt" | "etfRvsRslt" => no_data(),
        "highlight" => json!({ "stat": "查無資料", "tables": [] }),
        _ => return None,
    };
    Some(body)
}

fn daily_quotes() -> Value {
    table(json!([
        ["6488", "環球晶", "520.00", "+5.00", "516.00", "522.00", "515.00", "519.20", "1,200,000", "623,040,000", "1,500", "520.00", "10", "521.00", "5", "0", "0", "0"],
        ["8069", "元太", "230.50", "-2.50", "233.00", "234.00", "229.00", "231.00", "5,000,000", "1,155,000,000", "4,000", "230.50", "20", "231.00", "15", "0", "0", "0"],
        ["730001", "環球晶元大28購01", "1.20", "0.00", "1.20", "1.20", "1.20", "1.20", "10,000", "12,000", "3", "", "", "", "", "", "", ""]
    ]))
}

fn daily_trade() -> Value {
    json!({
        "stat": "ok",
        "tables": [
            {
                "totalCount": 1,
                "data": [[
                    "6488", "環球晶",
                    "300,000", "200,000", "100,000",
                    "0", "0", "0",
                    "300,000", "200,000", "100,000",
                    "50,000", "20,000", "30,000",
                    "10,000", "5,000", "5,000",
                    "2,000", "1,000", "1,000",
                    "12,000", "6,000", "6,000",
                    "136,000"
                ]]
            },
            { "totalCount": 0, "data": [] }
        ]
    })
}

fn balance() -> Value {
    json!({
        "stat": "ok",
        "tables": [{
            "totalCount": 1,
            "data": [
                ["6488", "環球晶", "3,000", "200", "150", "0", "3,050", "", "", "12,000,000", "100", "30", "20", "0", "110", "", "", "12,000,000", "4", ""]
            ],
            "summary": [
                ["合計", "", "1,200,000", "40,000", "38,000", "1,000", "1,201,000", "", "", "", "50,000", "6,000", "5,000", "200", "50,800", "", "", "", "", ""],
                ["融資金", "", "45,000,000", "1,600,000", "1,500,000", "40,000", "45,060,000"]
            ]
        }]
    })
}

fn sbl() -> Value {
    table(json!([
        ["6488", "環球晶", "100", "30", "20", "0", "110", "12,000,000", "2,000", "100", "50", "0", "2,050", "500,000", ""]
    ]))
}

fn pe_qry_date() -> Value {
    table(json!([
        ["6488", "環球晶", "12.50", "25.00", "112", "4.81", "2.30"],
        ["8069", "元太", "N/A", "3.50", "112", "1.52", "4.10"]
    ]))
}

fn insti_summary() -> Value {
    table(json!([
        ["外資及陸資合計", "30,000,000,000", "28,000,000,000", "2,000,000,000"],
        ["投信", "2,000,000,000", "1,500,000,000", "500,000,000"],
        ["自營商合計", "4,000,000,000", "4,200,000,000", "-200,000,000"],
        ["三大法人合計", "36,000,000,000", "33,700,000,000", "2,300,000,000"]
    ]))
}

fn highlight() -> Value {
    json!({
        "stat": "ok",
        "tables": [{
            "totalCount": 1,
            "data": [[
                "245.10", "1.20", "40,000,000", "400,000", "300,000", "800", "6,000,000",
                "420", "15", "300", "4", "80", "20"
            ]]
        }]
    })
}

fn sectinx() -> Value {
    table(json!([
        ["櫃買指數", "245.10", "1.20", "244.00", "246.00", "243.50"],
        ["半導體類", "612.30", "-3.10", "615.00", "616.20", "610.00"],
        ["生技醫療類", "180.40", "0.90", "179.50", "181.00", "179.00"]
    ]))
}

fn etf_split_rslt() -> Value {
    table(json!([
        ["1130102", "006201", "元大富櫃50", "80.00", "20.00", "22.00", "18.00", "20.00"]
    ]))
}

fn etf_rvs_rslt() -> Value {
    table(json!([
        ["1130102", "00679B", "元大美債20年", "2.00", "20.00", "22.00", "18.00", "20.00"]
    ]))
}

fn etf_split() -> Value {
    table(json!([
        ["006201", "元大富櫃50", "113/01/20", "4", "40.12", "10.03", "113/02/05"]
    ]))
}

fn etf_rvs() -> Value {
    table(json!([
        ["00679B", "元大美債20年", "113/01/22", "0.25", "2.50", "10.00", ""]
    ]))
}

fn ex_daily_q() -> Value {
    table(json!([
        ["113/01/02", "6488", "環球晶", "520.00", "510.00", "", "", "10.00", "除息", "561.00", "459.00", "510.00", "510.00", "10.00", "0", "0", "0", "0", "0", "0", "0"]
    ]))
}

fn revivt() -> Value {
    let detail = "<table><tr><th>停止買賣日期</th><td>112/12/20</td></tr>\
                  <tr><th>每壹仟股換發新股票</th><td>800.00 股</td></tr>\
                  <tr><th>每股退還股款</th><td>2.00 元/股</td></tr></table>";
    table(json!([
        ["1130102", "6573", "虹揚-KY", "20.00", "25.00", "27.50", "22.50", "25.00", "25.00", "彌補虧損", detail]
    ]))
}

fn pv_chg_rslt() -> Value {
    table(json!([
        ["1130102", "3093", "港建", "80.00", "20.00", "22.00", "18.00", "20.00"]
    ]))
}

fn pre_post() -> Value {
    table(json!([
        ["113/01/15", "6488", "環球晶", "除權息", "0.1", "", "", "10", "", "", "", ""],
        ["113/01/15", "64881B", "環球晶一債", "除息", "", "", "", "1", "", "", "", ""]
    ]))
}

fn decap() -> Value {
    table(json!([
        ["6573", "虹揚-KY", "113/01/10", "20.5", "2.05", "彌補虧損", "", "不適用", "不適用"]
    ]))
}

fn pv_chg_ann() -> Value {
    table(json!([
        ["3093", "港建", "113/01/20", "4", "10.00", "2.50", "113/02/05"]
    ]))
}

fn applicant() -> Value {
    table(json!([
        ["1", "7780", "大研生醫", "112/10/02", "王某", "450,000", "112/11/15", "112/12/01", "112/12/20", "", "元大證券", "58.00", "", "https://example.invalid/a", "https://example.invalid/b"]
    ]))
}

fn sect_ratio() -> Value {
    table(json!([
        ["半導體", "10,000,000,000", "25.00", "100,000,000"],
        ["電腦及週邊設備", "2,000,000,000", "5.00", "20,000,000"],
        ["光電", "3,000,000,000", "7.50", "30,000,000"],
        ["通信網路", "4,000,000,000", "10.00", "40,000,000"],
        ["電子零組件", "5,000,000,000", "12.50", "50,000,000"],
        ["電子通路", "600,000,000", "1.50", "6,000,000"],
        ["資訊服務", "700,000,000", "1.75", "7,000,000"],
        ["其他電子", "800,000,000", "2.00", "8,000,000"],
        ["生技醫療", "9,000,000,000", "22.50", "90,000,000"],
        ["管理股票", "10,000", "0.00", "1,000"]
    ]))
}

fn market_stats() -> Value {
    json!({
        "stat": "ok",
        "tables": [{
            "totalCount": 2,
            "data": [
                ["股票", "39,000,000,000", "380,000,000", "290,000"],
                ["ETF", "1,000,000,000", "20,000,000", "10,000"]
            ],
            "summary": [
                ["小計", "40,000,000,000", "400,000,000", "300,000"],
                ["合計", "40,000,000,000", "400,000,000", "300,000"]
            ]
        }]
    })
}
