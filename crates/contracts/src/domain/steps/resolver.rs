use super::step_name::StepName;
use super::topology::{
    PrevNext, StepTopology, HOTEL_VOUCHER_FLOW, MEDIA_OFFLINE_FLOW, MEDIA_ONLINE_FLOW,
    PRODUCT_FLOW, VOUCHER_FLOW,
};
use crate::domain::category::Category;
use crate::enums::CategoryKind;

/// Topology the wizard walks for a category kind
pub fn topology_for(kind: CategoryKind) -> &'static StepTopology {
    match kind {
        CategoryKind::Product => &PRODUCT_FLOW,
        CategoryKind::MediaOnline => &MEDIA_ONLINE_FLOW,
        CategoryKind::MediaOffline => &MEDIA_OFFLINE_FLOW,
        CategoryKind::Voucher => &VOUCHER_FLOW,
        CategoryKind::HotelVoucher => &HOTEL_VOUCHER_FLOW,
    }
}

/// Previous and next step slugs for the back/next buttons.
///
/// Media categories first try to locate the current page from `pathname`.
/// Without a match they walk the linear product flow like every other
/// non-voucher category. An unrecognised step yields [`PrevNext::NONE`].
pub fn get_prev_next_step_paths(
    category: &str,
    step_name: &str,
    pathname: Option<&str>,
) -> PrevNext {
    resolve_step_paths(&Category::resolve(category), step_name, pathname)
}

pub fn resolve_step_paths(
    category: &Category,
    step_name: &str,
    pathname: Option<&str>,
) -> PrevNext {
    let kind = category.kind();

    if kind.is_media() {
        if let Some(node) = pathname.and_then(|path| topology_for(kind).match_path(path)) {
            return node.links;
        }
    }

    let topology = if kind.is_voucher() {
        topology_for(kind)
    } else {
        &PRODUCT_FLOW
    };

    StepName::parse(step_name)
        .and_then(|step| topology.node_for_step(step))
        .map(|node| node.links)
        .unwrap_or(PrevNext::NONE)
}

/// Product-info page that follows general info for a media subcategory
pub fn media_product_info_slug(
    category: &Category,
    subcategory_name: &str,
) -> Option<&'static str> {
    let subcategory = subcategory_name.to_lowercase();
    match category.kind() {
        CategoryKind::MediaOnline if subcategory.contains("digital screen") => {
            Some("mediaonlinedigitalscreensinfo")
        }
        CategoryKind::MediaOnline => Some("mediaonlineproductinfo"),
        CategoryKind::MediaOffline if subcategory.contains("hoarding") => {
            Some("mediaofflinehoardinginfo")
        }
        CategoryKind::MediaOffline => Some("mediaofflineproductinfo"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_flow() {
        let steps = ["general-info", "product-info", "tech-info", "go-live"];
        for (i, step) in steps.iter().enumerate() {
            let links = get_prev_next_step_paths("textile", step, None);
            let prev = if i == 0 { None } else { Some(steps[i - 1]) };
            let next = steps.get(i + 1).copied();
            assert_eq!(links, PrevNext::new(prev, next), "step {}", step);
        }
    }

    #[test]
    fn test_linear_flow_accepts_camel_case() {
        assert_eq!(
            get_prev_next_step_paths("electronics", "techInfo", None),
            PrevNext::new(Some("product-info"), Some("go-live"))
        );
    }

    #[test]
    fn test_unknown_category_walks_linear_flow() {
        assert_eq!(
            get_prev_next_step_paths("", "general-info", None),
            PrevNext::new(None, Some("product-info"))
        );
    }

    #[test]
    fn test_hotel_voucher_go_live() {
        assert_eq!(
            get_prev_next_step_paths("hotelsVoucher", "goLive", None),
            PrevNext::new(Some("hotelstechinfo"), Some("voucherdesign"))
        );
    }

    #[test]
    fn test_voucher_flow() {
        assert_eq!(
            get_prev_next_step_paths("qsrVoucher", "productInfo", None),
            PrevNext::new(Some("generalinformation"), Some("vouchertechinfo"))
        );
        assert_eq!(
            get_prev_next_step_paths("eeVoucher", "voucherDesign", None),
            PrevNext::new(Some("vouchergolive"), None)
        );
        assert_eq!(
            get_prev_next_step_paths("spaVoucher", "generalInformation", None),
            PrevNext::new(None, Some("voucherinfo"))
        );
    }

    #[test]
    fn test_media_longest_key_wins() {
        let path = "/sellerhub/product-info/mediaonlinedigitalscreensinfo/64f1c2";
        assert_eq!(
            get_prev_next_step_paths("mediaonline", "productInfo", Some(path)),
            MEDIA_ONLINE_FLOW
                .node("mediaonlinedigitalscreensinfo")
                .unwrap()
                .links
        );
    }

    #[test]
    fn test_media_offline_hoarding_branch() {
        assert_eq!(
            get_prev_next_step_paths(
                "mediaoffline",
                "techInfo",
                Some("/mediaofflinehoardingupload/1")
            ),
            PrevNext::new(Some("mediaofflinehoardinginfo"), Some("mediaofflinegolive"))
        );
    }

    #[test]
    fn test_digital_screens_back_navigation() {
        let forward = get_prev_next_step_paths(
            "mediaonline",
            "productInfo",
            Some("/mediaonlinedigitalscreensinfo/1"),
        );
        assert_eq!(forward.next, Some("mediaonlinedigitalscreenstechinfo"));

        let back = get_prev_next_step_paths(
            "mediaonline",
            "techInfo",
            Some("/mediaonlinedigitalscreenstechinfo/1"),
        );
        assert_eq!(
            back,
            PrevNext::new(Some("mediaonlinedigitalscreensinfo"), Some("mediaonlinegolive"))
        );
    }

    #[test]
    fn test_media_without_match_walks_linear_flow() {
        assert_eq!(
            get_prev_next_step_paths("mediaonline", "go-live", Some("/sellerhub/dashboard")),
            PrevNext::new(Some("tech-info"), None)
        );
        assert_eq!(
            get_prev_next_step_paths("mediaoffline", "product-info", None),
            PrevNext::new(Some("general-info"), Some("tech-info"))
        );
    }

    #[test]
    fn test_pathname_ignored_outside_media() {
        assert_eq!(
            get_prev_next_step_paths("textile", "go-live", Some("/mediaonlinegolive/1")),
            PrevNext::new(Some("tech-info"), None)
        );
    }

    #[test]
    fn test_unrecognised_step() {
        assert_eq!(get_prev_next_step_paths("textile", "checkout", None), PrevNext::NONE);
        assert_eq!(get_prev_next_step_paths("qsrVoucher", "", None), PrevNext::NONE);
        // voucher design only exists in voucher flows
        assert_eq!(get_prev_next_step_paths("textile", "voucherDesign", None), PrevNext::NONE);
    }

    #[test]
    fn test_media_branch_slug() {
        let online = Category::resolve("mediaonline");
        let offline = Category::resolve("mediaoffline");
        assert_eq!(
            media_product_info_slug(&online, "Digital Screens"),
            Some("mediaonlinedigitalscreensinfo")
        );
        assert_eq!(media_product_info_slug(&online, "Radio"), Some("mediaonlineproductinfo"));
        assert_eq!(
            media_product_info_slug(&offline, "Hoardings"),
            Some("mediaofflinehoardinginfo")
        );
        assert_eq!(media_product_info_slug(&Category::resolve("textile"), "Hoardings"), None);
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let path = Some("/mediaonlinetechinfo/abc");
        assert_eq!(
            get_prev_next_step_paths("mediaonline", "techInfo", path),
            get_prev_next_step_paths("mediaonline", "techInfo", path)
        );
    }
}
