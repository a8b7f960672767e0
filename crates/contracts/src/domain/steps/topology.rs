use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use super::step_name::StepName;

/// Neighbouring step slugs; `None` means there is nowhere to go
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct PrevNext {
    pub prev: Option<&'static str>,
    pub next: Option<&'static str>,
}

impl PrevNext {
    pub const NONE: PrevNext = PrevNext {
        prev: None,
        next: None,
    };

    pub const fn new(prev: Option<&'static str>, next: Option<&'static str>) -> Self {
        Self { prev, next }
    }
}

/// A page of one topology: the step it implements, its route slug and links
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StepNode {
    pub step: StepName,
    pub slug: &'static str,
    pub links: PrevNext,
}

const fn node(
    step: StepName,
    slug: &'static str,
    prev: Option<&'static str>,
    next: Option<&'static str>,
) -> StepNode {
    StepNode {
        step,
        slug,
        links: PrevNext::new(prev, next),
    }
}

/// Step graph of one category family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepTopology {
    pub name: &'static str,
    pub nodes: &'static [StepNode],
    /// `(from, to)` next-links allowed to join a node whose `prev` points elsewhere
    pub merges: &'static [(&'static str, &'static str)],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TopologyError {
    Empty,
    DuplicateSlug(&'static str),
    InitialCount(usize),
    NoTerminal,
    UnknownSlug { from: &'static str, to: &'static str },
    SelfLink(&'static str),
    Cycle(&'static str),
    OneWayLink { from: &'static str, to: &'static str },
}

impl fmt::Display for TopologyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TopologyError::Empty => write!(f, "topology has no steps"),
            TopologyError::DuplicateSlug(slug) => write!(f, "slug '{}' is defined twice", slug),
            TopologyError::InitialCount(count) => {
                write!(f, "expected exactly one initial step, found {}", count)
            }
            TopologyError::NoTerminal => write!(f, "topology has no terminal step"),
            TopologyError::UnknownSlug { from, to } => {
                write!(f, "step '{}' links to unknown step '{}'", from, to)
            }
            TopologyError::SelfLink(slug) => write!(f, "step '{}' links to itself", slug),
            TopologyError::Cycle(slug) => write!(f, "following next from '{}' never ends", slug),
            TopologyError::OneWayLink { from, to } => {
                write!(f, "step '{}' leads to '{}' but back from there goes elsewhere", from, to)
            }
        }
    }
}

impl std::error::Error for TopologyError {}

impl StepTopology {
    pub fn node(&self, slug: &str) -> Option<&'static StepNode> {
        self.nodes.iter().find(|n| n.slug == slug)
    }

    /// First node implementing `step`
    pub fn node_for_step(&self, step: StepName) -> Option<&'static StepNode> {
        self.nodes.iter().find(|n| n.step == step)
    }

    /// The node without a previous step
    pub fn initial(&self) -> Option<&'static StepNode> {
        self.nodes.iter().find(|n| n.links.prev.is_none())
    }

    /// Nodes ordered by slug length, longest first; ties keep table order
    pub fn nodes_longest_first(&self) -> Vec<&'static StepNode> {
        let mut nodes: Vec<&'static StepNode> = self.nodes.iter().collect();
        nodes.sort_by(|a, b| b.slug.len().cmp(&a.slug.len()));
        nodes
    }

    /// Node whose slug occurs in `pathname`, longer slugs tried first
    pub fn match_path(&self, pathname: &str) -> Option<&'static StepNode> {
        self.nodes_longest_first()
            .into_iter()
            .find(|n| pathname.contains(n.slug))
    }

    pub fn validate(&self) -> Result<(), TopologyError> {
        if self.nodes.is_empty() {
            return Err(TopologyError::Empty);
        }

        let mut slugs = HashSet::new();
        for n in self.nodes {
            if !slugs.insert(n.slug) {
                return Err(TopologyError::DuplicateSlug(n.slug));
            }
        }

        let initial = self.nodes.iter().filter(|n| n.links.prev.is_none()).count();
        if initial != 1 {
            return Err(TopologyError::InitialCount(initial));
        }
        if !self.nodes.iter().any(|n| n.links.next.is_none()) {
            return Err(TopologyError::NoTerminal);
        }

        for n in self.nodes {
            for target in [n.links.prev, n.links.next].into_iter().flatten() {
                if target == n.slug {
                    return Err(TopologyError::SelfLink(n.slug));
                }
                if !slugs.contains(target) {
                    return Err(TopologyError::UnknownSlug {
                        from: n.slug,
                        to: target,
                    });
                }
            }
        }

        for start in self.nodes {
            let mut current = start;
            let mut hops = 0;
            while let Some(next) = current.links.next {
                hops += 1;
                if hops > self.nodes.len() {
                    return Err(TopologyError::Cycle(start.slug));
                }
                current = match self.node(next) {
                    Some(n) => n,
                    None => {
                        return Err(TopologyError::UnknownSlug {
                            from: current.slug,
                            to: next,
                        })
                    }
                };
            }
        }

        for n in self.nodes {
            let Some(next) = n.links.next else { continue };
            let back = self.node(next).and_then(|target| target.links.prev);
            if back != Some(n.slug) && !self.merges.contains(&(n.slug, next)) {
                return Err(TopologyError::OneWayLink {
                    from: n.slug,
                    to: next,
                });
            }
        }

        Ok(())
    }
}

pub static PRODUCT_FLOW: StepTopology = StepTopology {
    name: "product",
    nodes: &[
        node(StepName::GeneralInfo, "general-info", None, Some("product-info")),
        node(StepName::ProductInfo, "product-info", Some("general-info"), Some("tech-info")),
        node(StepName::TechInfo, "tech-info", Some("product-info"), Some("go-live")),
        node(StepName::GoLive, "go-live", Some("tech-info"), None),
    ],
    merges: &[],
};

pub static VOUCHER_FLOW: StepTopology = StepTopology {
    name: "voucher",
    nodes: &[
        node(StepName::GeneralInfo, "generalinformation", None, Some("voucherinfo")),
        node(
            StepName::ProductInfo,
            "voucherinfo",
            Some("generalinformation"),
            Some("vouchertechinfo"),
        ),
        node(StepName::TechInfo, "vouchertechinfo", Some("voucherinfo"), Some("vouchergolive")),
        node(StepName::GoLive, "vouchergolive", Some("vouchertechinfo"), Some("voucherdesign")),
        node(StepName::VoucherDesign, "voucherdesign", Some("vouchergolive"), None),
    ],
    merges: &[],
};

pub static HOTEL_VOUCHER_FLOW: StepTopology = StepTopology {
    name: "hotel_voucher",
    nodes: &[
        node(StepName::GeneralInfo, "generalinformation", None, Some("hotelsproductinfo")),
        node(
            StepName::ProductInfo,
            "hotelsproductinfo",
            Some("generalinformation"),
            Some("hotelstechinfo"),
        ),
        node(StepName::TechInfo, "hotelstechinfo", Some("hotelsproductinfo"), Some("hotelsgolive")),
        node(StepName::GoLive, "hotelsgolive", Some("hotelstechinfo"), Some("voucherdesign")),
        node(StepName::VoucherDesign, "voucherdesign", Some("hotelsgolive"), None),
    ],
    merges: &[],
};

// "product-info" stays for drafts created before the media pages got their own routes
pub static MEDIA_ONLINE_FLOW: StepTopology = StepTopology {
    name: "media_online",
    nodes: &[
        node(StepName::GeneralInfo, "general-info", None, Some("mediaonlineproductinfo")),
        node(
            StepName::ProductInfo,
            "product-info",
            Some("general-info"),
            Some("mediaonlinetechinfo"),
        ),
        node(
            StepName::ProductInfo,
            "mediaonlineproductinfo",
            Some("general-info"),
            Some("mediaonlinetechinfo"),
        ),
        node(
            StepName::ProductInfo,
            "mediaonlinedigitalscreensinfo",
            Some("general-info"),
            Some("mediaonlinedigitalscreenstechinfo"),
        ),
        node(
            StepName::TechInfo,
            "mediaonlinedigitalscreenstechinfo",
            Some("mediaonlinedigitalscreensinfo"),
            Some("mediaonlinegolive"),
        ),
        node(
            StepName::TechInfo,
            "mediaonlinetechinfo",
            Some("mediaonlineproductinfo"),
            Some("mediaonlinegolive"),
        ),
        node(StepName::GoLive, "mediaonlinegolive", Some("mediaonlinetechinfo"), None),
    ],
    merges: &[
        ("product-info", "mediaonlinetechinfo"),
        ("mediaonlinedigitalscreenstechinfo", "mediaonlinegolive"),
    ],
};

pub static MEDIA_OFFLINE_FLOW: StepTopology = StepTopology {
    name: "media_offline",
    nodes: &[
        node(StepName::GeneralInfo, "general-info", None, Some("mediaofflineproductinfo")),
        node(
            StepName::ProductInfo,
            "product-info",
            Some("general-info"),
            Some("mediaofflinetechinfo"),
        ),
        node(
            StepName::ProductInfo,
            "mediaofflineproductinfo",
            Some("general-info"),
            Some("mediaofflinetechinfo"),
        ),
        node(
            StepName::ProductInfo,
            "mediaofflinehoardinginfo",
            Some("general-info"),
            Some("mediaofflinehoardingupload"),
        ),
        node(
            StepName::TechInfo,
            "mediaofflinehoardingupload",
            Some("mediaofflinehoardinginfo"),
            Some("mediaofflinegolive"),
        ),
        node(
            StepName::TechInfo,
            "mediaofflinetechinfo",
            Some("mediaofflineproductinfo"),
            Some("mediaofflinegolive"),
        ),
        node(StepName::GoLive, "mediaofflinegolive", Some("mediaofflinetechinfo"), None),
    ],
    merges: &[
        ("product-info", "mediaofflinetechinfo"),
        ("mediaofflinehoardingupload", "mediaofflinegolive"),
    ],
};

pub static ALL_TOPOLOGIES: [&StepTopology; 5] = [
    &PRODUCT_FLOW,
    &VOUCHER_FLOW,
    &HOTEL_VOUCHER_FLOW,
    &MEDIA_ONLINE_FLOW,
    &MEDIA_OFFLINE_FLOW,
];
