use twdata_core::FetchRequest;

const NO_DATA: &str = "<html><body><center><h3>查無所需資料</h3></center></body></html>";

/// Fixture page for the MOPS foreign-holdings form, or `None` for any other
/// endpoint.
pub(crate) fn respond(req: &FetchRequest) -> Option<String> {
    if req.endpoint() != "t13sa150_otc" {
        return None;
    }
    let on_day = req.param_value("years") == Some("2024")
        && req.param_value("months") == Some("01")
        && req.param_value("days") == Some("02");
    Some(if on_day { fini_page() } else { NO_DATA.to_string() })
}

fn fini_page() -> String {
    "<html><body><center><table border='1'>\
     <tr><th colspan='8'>上櫃公司外資及陸資投資持股統計</th></tr>\
     <tr><th>證券代號</th><th>證券名稱</th><th>發行股數</th><th>外資尚可投資股數</th>\
     <th>全體外資持有股數</th><th>外資尚可投資比率</th><th>全體外資持股比率</th>\
     <th>法令投資上限比率</th></tr>\
     <tr><td>6488</td><td>環球晶(GWC)</td><td>478,475,603</td><td>356,105,212</td>\
     <td>122,370,391</td><td>74.42</td><td>25.57</td><td>100.00</td></tr>\
     <tr><td>8069</td><td>元太 (E INK)</td><td>1,140,000,000</td><td>800,000,000</td>\
     <td>340,000,000</td><td>70.17</td><td>29.82</td><td>100.00</td></tr>\
     </table></center></body></html>"
        .to_string()
}
