//! Menu icon rendering.
//!
//! Menu rows store a Font Awesome class name (`"fa-chart-line"`). The admin
//! types these by hand, so the lookup is forgiving: case, separators and the
//! `fa-` prefix are all ignored, and unknown names fall back to a dot rather
//! than rendering nothing.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;

pub use dioxus_free_icons::icons::fa_solid_icons::*;

fn normalize(name: &str) -> String {
    let name = name.trim().to_ascii_lowercase();
    let name = name.strip_prefix("fa-solid").unwrap_or(&name);
    name.trim()
        .trim_start_matches("fa-")
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect()
}

/// Render the icon a menu row names, at `size` pixels square.
pub fn menu_icon(name: &str, size: u32) -> Element {
    match normalize(name).as_str() {
        "house" | "home" => rsx! { Icon { icon: FaHouse, width: size, height: size } },
        "gauge" | "dashboard" => rsx! { Icon { icon: FaGauge, width: size, height: size } },
        "chartline" => rsx! { Icon { icon: FaChartLine, width: size, height: size } },
        "chartcolumn" | "chartbar" => rsx! {
            Icon { icon: FaChartColumn, width: size, height: size }
        },
        "chartpie" => rsx! { Icon { icon: FaChartPie, width: size, height: size } },
        "user" => rsx! { Icon { icon: FaUser, width: size, height: size } },
        "users" => rsx! { Icon { icon: FaUsers, width: size, height: size } },
        "usergear" => rsx! { Icon { icon: FaUserGear, width: size, height: size } },
        "list" | "listul" => rsx! { Icon { icon: FaListUl, width: size, height: size } },
        "bars" => rsx! { Icon { icon: FaBars, width: size, height: size } },
        "layergroup" => rsx! { Icon { icon: FaLayerGroup, width: size, height: size } },
        "tag" => rsx! { Icon { icon: FaTag, width: size, height: size } },
        "tags" => rsx! { Icon { icon: FaTags, width: size, height: size } },
        "wallet" => rsx! { Icon { icon: FaWallet, width: size, height: size } },
        "moneybill" => rsx! { Icon { icon: FaMoneyBill, width: size, height: size } },
        "moneybilltrendup" => rsx! { Icon { icon: FaMoneyBillTrendUp, width: size, height: size } },
        "moneybillwave" => rsx! { Icon { icon: FaMoneyBillWave, width: size, height: size } },
        "coins" => rsx! { Icon { icon: FaCoins, width: size, height: size } },
        "creditcard" => rsx! { Icon { icon: FaCreditCard, width: size, height: size } },
        "receipt" => rsx! { Icon { icon: FaReceipt, width: size, height: size } },
        "piggybank" => rsx! { Icon { icon: FaPiggyBank, width: size, height: size } },
        "scalebalanced" => rsx! { Icon { icon: FaScaleBalanced, width: size, height: size } },
        "folder" => rsx! { Icon { icon: FaFolder, width: size, height: size } },
        "folderopen" => rsx! { Icon { icon: FaFolderOpen, width: size, height: size } },
        "gear" | "cog" => rsx! { Icon { icon: FaGear, width: size, height: size } },
        "rightfromsquare" | "signout" => rsx! {
            Icon { icon: FaUpRightFromSquare, width: size, height: size }
        },
        "arrowtrendup" => rsx! { Icon { icon: FaArrowTrendUp, width: size, height: size } },
        "arrowtrenddown" => rsx! { Icon { icon: FaArrowTrendDown, width: size, height: size } },
        "utensils" => rsx! { Icon { icon: FaUtensils, width: size, height: size } },
        "cartshopping" | "shoppingcart" => rsx! {
            Icon { icon: FaCartShopping, width: size, height: size }
        },
        "plane" => rsx! { Icon { icon: FaPlane, width: size, height: size } },
        "bolt" => rsx! { Icon { icon: FaBolt, width: size, height: size } },
        _ => rsx! { Icon { icon: FaCircleDot, width: size, height: size } },
    }
}
