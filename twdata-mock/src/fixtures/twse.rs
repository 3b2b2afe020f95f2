use serde_json::{Value, json};
use twdata_core::FetchRequest;

use super::{TWSE_DAY, in_range};

/// What TWSE returns for a day or range without data.
fn no_data() -> Value {
    json!({ "stat": "很抱歉，沒有符合條件的資料!", "total": 0 })
}

fn ok(data: Value) -> Value {
    json!({ "stat": "OK", "date": TWSE_DAY, "data": data })
}

/// Fixture body for a TWSE endpoint, or `None` when the endpoint is not a
/// TWSE one.
pub(crate) fn respond(req: &FetchRequest) -> Option<Value> {
    let date = req.param_value("date");
    let on_day = date == Some(TWSE_DAY);
    let ranged = in_range(req, TWSE_DAY);
    let stock = req.param_value("STK_NO").unwrap_or_default();
    let day_date = req.param_value("dayDate") == Some(TWSE_DAY);

    let body = match req.endpoint() {
        "MI_INDEX" if on_day => mi_index(),
        "T86" => match date {
            Some(TWSE_DAY) => t86_current(),
            Some("20171215") => t86_fourteen(),
            Some("20120502") => t86_ten(),
            _ => no_data(),
        },
        "MI_MARGN" if on_day => match req.param_value("selectType") {
            Some("MS") => mi_margn_totals(),
            _ => mi_margn(),
        },
        "TWT93U" if on_day => twt93u(),
        "BFIAMU" if on_day => bfiamu(),
        "BWIBBU_d" if on_day => bwibbu_d(),
        "MI_QFIIS" if on_day => mi_qfiis(),
        "BFI82U" if day_date => bfi82u(),
        "MI_5MINS_INDEX" if on_day => mi_5mins_index(),
        "TWT49U" if ranged => twt49u(),
        "TWT49UDetail" => twt49u_detail(stock),
        "TWT48U" => twt48u(),
        "TWTAUU" if ranged => twtauu(),
        "TWTAVU" => twtavu(),
        "TWTAVUDetail" => twtavu_detail(stock),
        "TWTB8U" if ranged => twtb8u(),
        "TWTB7U" => twtb7u(),
        "TWTB7UDetail" => twtb7u_detail(stock),
        "TWTCAU" if ranged => twtcau(),
        "TWTC9U" => twtc9u(),
        "applylisting" => match date {
            None | Some("20240101") => applylisting(),
            Some(_) => no_data(),
        },
        "MI_INDEX" | "MI_MARGN" | "TWT93U" | "BFIAMU" | "BWIBBU_d" | "MI_QFIIS" | "BFI82U"
        | "MI_5MINS_INDEX" | "TWT49U" | "TWTAUU" | "TWTB8U" | "TWTCAU" => no_data(),
        _ => return None,
    };
    Some(body)
}

fn empty_table(title: &str) -> Value {
    json!({ "title": title, "fields": [], "data": [] })
}

fn mi_index() -> Value {
    let mut tables: Vec<Value> = (0..6).map(|i| empty_table(&format!("表{i}"))).collect();
    tables.push(json!({
        "title": "大盤統計資訊",
        "data": [
            ["1.一般股票", "280,000,000,000", "7,000,000,000", "2,800,000"],
            ["總計(1~15)", "300,000,000,000", "8,000,000,000", "3,000,000"]
        ]
    }));
    tables.push(json!({
        "title": "漲跌證券數合計",
        "data": [
            ["上漲(漲停)", "7,000(150)", "500(12)"],
            ["下跌(跌停)", "3,500(20)", "400(3)"],
            ["持平", "1,200", "80"],
            ["未成交", "2,500", "10"],
            ["無比價", "60", "5"]
        ]
    }));
    tables.push(json!({
        "title": "每日收盤行情(全部(不含權證、牛熊證))",
        "data": [
            ["2330", "台積電", "25,000,000", "30,000", "14,825,000,000", "590.00", "595.00", "588.00", "593.00", "<p style= color:red>+</p>", "5.00", "593.00", "1,200", "594.00", "800", "15.80"],
            ["2317", "鴻海", "40,000,000", "20,000", "4,170,000,000", "104.50", "105.00", "103.00", "103.50", "<p style= color:green>-</p>", "1.50", "103.50", "500", "104.00", "300", "12.10"],
            ["0050", "元大台灣50", "8,000,000", "6,000", "1,050,000,000", "131.00", "131.50", "130.50", "131.00", "<p> </p>", "0.00", "131.00", "10", "131.05", "20", "0.00"]
        ]
    }));
    json!({ "stat": "OK", "date": TWSE_DAY, "tables": tables })
}

fn t86_current() -> Value {
    ok(json!([
        ["2330", "台積電", "20,000,000", "15,000,000", "5,000,000", "0", "0", "0", "1,000,000", "500,000", "500,000", "200,000", "300,000", "200,000", "100,000", "400,000", "300,000", "100,000", "5,700,000"],
        ["2317", "鴻海", "8,000,000", "9,000,000", "-1,000,000", "0", "0", "0", "0", "100,000", "-100,000", "0", "0", "0", "0", "0", "0", "0", "-1,100,000"]
    ]))
}

fn t86_fourteen() -> Value {
    ok(json!([
        ["2330", "台積電", "10,000", "8,000", "2,000", "500", "0", "500", "100", "300", "200", "100", "100", "100", "0", "2,600"]
    ]))
}

fn t86_ten() -> Value {
    ok(json!([
        ["2330", "台積電", "10,000", "8,000", "2,000", "500", "0", "500", "300", "200", "100", "2,600"]
    ]))
}

fn mi_margn() -> Value {
    json!({
        "stat": "OK",
        "date": TWSE_DAY,
        "tables": [
            { "title": "信用交易統計", "data": [["融資(交易單位)", "1", "2", "3", "4", "5"]] },
            {
                "title": "融資融券彙總",
                "data": [
                    ["2330", "台積電", "1,200", "1,500", "10", "20,000", "19,690", "6,250,000", "30", "20", "0", "500", "490", "6,250,000", "5", ""],
                    ["2317", "鴻海", "3,000", "2,500", "0", "40,000", "40,500", "3,500,000", "100", "80", "0", "1,000", "980", "3,500,000", "12", "X"]
                ]
            }
        ]
    })
}

fn mi_margn_totals() -> Value {
    json!({
        "stat": "OK",
        "date": TWSE_DAY,
        "tables": [{
            "title": "信用交易統計",
            "data": [
                ["融資(交易單位)", "300,000", "280,000", "5,000", "6,500,000", "6,515,000"],
                ["融券(交易單位)", "20,000", "25,000", "1,000", "300,000", "304,000"],
                ["融資金額(仟元)", "9,000,000", "8,500,000", "150,000", "270,000,000", "270,350,000"]
            ]
        }]
    })
}

fn twt93u() -> Value {
    ok(json!([
        ["2330", "台積電", "500", "20", "30", "0", "490", "6,250,000", "8,000", "300", "100", "0", "8,200", "900,000", ""],
        ["2317", "鴻海", "1,000", "80", "100", "0", "980", "3,500,000", "12,000", "500", "200", "0", "12,300", "800,000", "*"]
    ]))
}

fn bfiamu() -> Value {
    ok(json!([
        ["水泥類指數", "40,000,000", "1,500,000,000", "20,000", "0.50"],
        ["化學生技醫療類指數", "60,000,000", "5,000,000,000", "40,000", "1.20"],
        ["電子工業類指數", "2,000,000,000", "150,000,000,000", "900,000", "10.00"],
        ["半導體類指數", "1,200,000,000", "120,000,000,000", "600,000", "8.00"],
        ["其他電子類指數", "800,000,000", "30,000,000,000", "300,000", "2.00"],
        ["化學類指數", "30,000,000", "2,000,000,000", "20,000", "0.60"],
        ["生技醫療類指數", "30,000,000", "3,000,000,000", "20,000", "0.60"],
        ["金融保險類指數", "500,000,000", "15,000,000,000", "150,000", "1.50"],
        ["其他類指數", "130,000,000", "6,000,000,000", "50,000", "0.70"],
        ["存託憑證", "1,000", "50,000", "10", "0.00"]
    ]))
}

fn bwibbu_d() -> Value {
    ok(json!([
        ["2330", "台積電", "2.10", "112", "15.80", "4.50", "112/3"],
        ["2317", "鴻海", "5.20", "112", "-", "1.30", "112/3"]
    ]))
}

fn mi_qfiis() -> Value {
    ok(json!([
        ["2330", "台積電", "TW0002330008", "25,932,070,783", "7,000,000,000", "18,932,070,783", "27.00", "73.00", "100.00", "", "", ""],
        ["2317", "鴻海", "TW0002317005", "13,862,478,847", "8,500,000,000", "5,362,478,847", "61.31", "38.68", "100.00", "", "", ""]
    ]))
}

fn bfi82u() -> Value {
    ok(json!([
        ["自營商(自行買賣)", "2,000,000,000", "1,800,000,000", "200,000,000"],
        ["自營商(避險)", "6,000,000,000", "5,500,000,000", "500,000,000"],
        ["投信", "3,000,000,000", "2,000,000,000", "1,000,000,000"],
        ["外資及陸資(不含外資自營商)", "90,000,000,000", "95,000,000,000", "-5,000,000,000"],
        ["外資自營商", "0", "0", "0"],
        ["合計", "101,000,000,000", "104,300,000,000", "-3,300,000,000"]
    ]))
}

fn mi_5mins_index() -> Value {
    json!({
        "stat": "OK",
        "date": TWSE_DAY,
        "fields": ["時間", "發行量加權股價指數", "水泥類指數", "未編入指數"],
        "data": [
            ["09:00:00", "17,930.81", "150.00", "1.00"],
            ["09:05:00", "17,950.00", "150.50", "1.00"],
            ["11:00:00", "18,000.00", "151.20", "1.00"],
            ["13:30:00", "17,853.76", "149.80", "1.00"]
        ]
    })
}

fn twt49u() -> Value {
    ok(json!([
        ["113年01月02日", "2330", "台積電", "593.00", "589.00", "4.00", "息", "647.50", "530.50", "589.00", "589.00", "2330,20240102", "112年第3季", "115.32", "32.34"],
        ["113年01月02日", "2317", "鴻海", "105.00", "100.00", "5.00", "息", "110.00", "90.00", "100.00", "100.00", "2317,20240102", "112/09/30", "120.00", "7.50"],
        ["113年01月02日", "FAIL", "測試失敗", "10.00", "9.00", "1.00", "息", "9.90", "8.10", "9.00", "9.00", "FAIL,20240102", "", "--", "--"]
    ]))
}

fn twt49u_detail(stock: &str) -> Value {
    match stock {
        "2330" => json!({
            "stat": "ok",
            "data": [["2330", "台積電", "4.00", "", "0", "0", "0", "0", "0", "0", "0", "0"]]
        }),
        "2454" => json!({
            "stat": "ok",
            "data": [["2454", "聯發科", "24.00", "", "0", "0", "0", "0", "0", "0", "0", "0"]]
        }),
        _ => no_data(),
    }
}

fn twt48u() -> Value {
    ok(json!([
        ["113年01月15日", "2454", "聯發科", "息", "", "", "", "<p>24.00</p>", "", "", "112年第3季", "440.00", "40.00"],
        ["113年01月18日", "2317", "鴻海", "息", "", "", "", "<p>5.30</p>", "", "", "112年第3季", "120.00", "7.50"]
    ]))
}

fn twtauu() -> Value {
    ok(json!([
        ["113/01/02", "4111", "濟生", "20.00", "25.00", "27.50", "22.50", "25.00", "25.00", "彌補虧損", "4111,20231220"]
    ]))
}

fn twtavu() -> Value {
    ok(json!([
        ["113/01/10", "4111", "濟生", "113/01/25", "20.50", "彌補虧損", "2.05", "", ""]
    ]))
}

fn twtavu_detail(stock: &str) -> Value {
    match stock {
        "4111" => ok(json!([
            ["4111", "濟生", "112/12/20", "800.00", "2.00", "0", "0", "0", "0", "0", "0", "0"]
        ])),
        _ => no_data(),
    }
}

fn twtb8u() -> Value {
    ok(json!([
        ["113/01/02", "1101", "台泥", "35.00", "35.00", "38.50", "31.50", "35.00", "1101,20231225,20240102"]
    ]))
}

fn twtb7u() -> Value {
    ok(json!([
        ["113/01/20", "6919", "康霈", "113/02/05", "0.25", "10.00", "2.50"]
    ]))
}

fn twtb7u_detail(stock: &str) -> Value {
    match stock {
        "6919" => ok(json!([["6919", "康霈", "", "4", "10.00", "2.50"]])),
        _ => no_data(),
    }
}

fn twtcau() -> Value {
    ok(json!([
        ["113/01/02", "00631L", "元大台灣50正2", "分割", "200.00", "22.22", "24.44", "20.00", "22.22"],
        ["113/01/02", "00673R", "元大S&P原油反1", "反分割", "2.00", "20.00", "22.00", "18.00", "20.00"]
    ]))
}

fn twtc9u() -> Value {
    ok(json!([
        ["113/01/20", "0050", "元大台灣50", "分割", "113/02/05", "4"],
        ["113/01/22", "00715L", "期街口布蘭特正2", "反分割", "", "0.25"]
    ]))
}

fn applylisting() -> Value {
    ok(json!([
        ["1", "7722", "LINEPAY", "113/05/08", "丁丁", "1,000,000", "113/07/18", "113/07/30", "", "", "", "<p>--</p>", "創新板"],
        ["2", "6949", "沛爾生醫-創", "113/01/02", "王某", "500,000", "113/02/20", "113/03/01", "113/03/10", "113/04/01", "元大證券", "<p>120.00</p>", ""]
    ]))
}
