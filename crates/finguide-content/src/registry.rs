//! The article registry: a read-only mapping from article id to its record.
//!
//! Populated once at first use and never mutated. Lookups by unknown id are
//! an expected outcome (stale links) and return `None` rather than erroring.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::{Article, Category};

static REGISTRY: Lazy<Registry> = Lazy::new(Registry::builtin);

/// The process-wide registry instance.
pub fn registry() -> &'static Registry {
    &REGISTRY
}

pub struct Registry {
    articles: Vec<Article>,
    by_id: HashMap<&'static str, usize>,
}

impl Registry {
    fn builtin() -> Self {
        Self::from_articles(builtin_articles())
    }

    /// Key uniqueness is enforced by construction; duplicates would be an
    /// authoring bug, caught here in debug builds and by the test suite.
    fn from_articles(articles: Vec<Article>) -> Self {
        let mut by_id = HashMap::with_capacity(articles.len());
        for (idx, article) in articles.iter().enumerate() {
            let prev = by_id.insert(article.id, idx);
            debug_assert!(prev.is_none(), "duplicate article id: {}", article.id);
        }
        Self { articles, by_id }
    }

    /// Look up an article by id. Any string is accepted; a miss is not an
    /// error.
    pub fn lookup(&self, id: &str) -> Option<&Article> {
        self.by_id.get(id).map(|&idx| &self.articles[idx])
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    /// All articles, in authored order.
    pub fn iter(&self) -> impl Iterator<Item = &Article> {
        self.articles.iter()
    }

    /// The short money-saving tips (no category metadata): the front page's
    /// feature cards.
    pub fn tips(&self) -> impl Iterator<Item = &Article> {
        self.iter().filter(|a| a.category.is_none())
    }

    /// The long-form categorized guides: the front page's post cards.
    pub fn posts(&self) -> impl Iterator<Item = &Article> {
        self.iter().filter(|a| a.category.is_some())
    }

    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &Article> {
        self.iter().filter(move |a| a.category == Some(category))
    }
}

/// Money-saving tip: no descriptive metadata.
fn tip(id: &'static str, title: &'static str, body: &'static str) -> Article {
    Article {
        id,
        title,
        body,
        category: None,
        author: None,
        date: None,
        read_time: None,
    }
}

/// Long-form guide with the full descriptive block.
fn guide(
    id: &'static str,
    title: &'static str,
    category: Category,
    date: &'static str,
    read_time: &'static str,
    body: &'static str,
) -> Article {
    Article {
        id,
        title,
        body,
        category: Some(category),
        author: Some("Finance Guide"),
        date: Some(date),
        read_time: Some(read_time),
    }
}

fn builtin_articles() -> Vec<Article> {
    vec![
        tip(
            "emergency-fund",
            "How to Build a $10,000 Emergency Fund in 12 Months",
            include_str!("../assets/articles/emergency-fund.html"),
        ),
        tip(
            "grocery-savings",
            "Cut Your Grocery Bill by 50% Without Couponing",
            include_str!("../assets/articles/grocery-savings.html"),
        ),
        tip(
            "budget-automation",
            "Set Up Your Budget on Autopilot in 30 Minutes",
            include_str!("../assets/articles/budget-automation.html"),
        ),
        tip(
            "subscription-audit",
            "The Great Subscription Audit: Find Hidden Money Drains",
            include_str!("../assets/articles/subscription-audit.html"),
        ),
        tip(
            "cash-challenges",
            "5 Fun Money-Saving Challenges That Actually Work",
            include_str!("../assets/articles/cash-challenges.html"),
        ),
        tip(
            "energy-savings",
            "Slash Your Energy Bills: 15 Proven Tactics",
            include_str!("../assets/articles/energy-savings.html"),
        ),
        guide(
            "index-fund-investing",
            "Index Fund Investing: Your Path to Long-Term Wealth",
            Category::Stocks,
            "December 2024",
            "8 min read",
            include_str!("../assets/articles/index-fund-investing.html"),
        ),
        guide(
            "dividend-growth-investing",
            "Dividend Growth Investing: Building Passive Income Streams",
            Category::Stocks,
            "July 2025",
            "7 min read",
            include_str!("../assets/articles/dividend-growth-investing.html"),
        ),
        guide(
            "xrp-analysis-2025",
            "XRP Analysis 2025: Future Prospects and Price Targets",
            Category::Investing,
            "July 2025",
            "10 min read",
            include_str!("../assets/articles/xrp-analysis-2025.html"),
        ),
        guide(
            "value-investing-fundamentals",
            "Value Investing Fundamentals: Finding Undervalued Gems",
            Category::Investing,
            "July 2025",
            "9 min read",
            include_str!("../assets/articles/value-investing-fundamentals.html"),
        ),
        guide(
            "crypto-basics-guide",
            "Cryptocurrency Basics: Your Complete Beginner's Guide",
            Category::Crypto,
            "July 2025",
            "10 min read",
            include_str!("../assets/articles/crypto-basics-guide.html"),
        ),
        guide(
            "defi-explained",
            "DeFi Explained: Decentralized Finance for Beginners",
            Category::Crypto,
            "July 2025",
            "8 min read",
            include_str!("../assets/articles/defi-explained.html"),
        ),
        guide(
            "crypto-security-guide",
            "Crypto Security: Protecting Your Digital Assets",
            Category::Crypto,
            "July 2025",
            "9 min read",
            include_str!("../assets/articles/crypto-security-guide.html"),
        ),
        guide(
            "freelancing-guide",
            "The Complete Freelancing Guide: From Side Gig to Full-Time Income",
            Category::MakingMoney,
            "July 2025",
            "12 min read",
            include_str!("../assets/articles/freelancing-guide.html"),
        ),
        guide(
            "online-business-ideas",
            "10 Online Business Ideas You Can Start This Weekend",
            Category::MakingMoney,
            "July 2025",
            "11 min read",
            include_str!("../assets/articles/online-business-ideas.html"),
        ),
        guide(
            "gig-economy-guide",
            "Mastering the Gig Economy: Your Guide to Flexible Income",
            Category::MakingMoney,
            "July 2025",
            "10 min read",
            include_str!("../assets/articles/gig-economy-guide.html"),
        ),
        guide(
            "dividend-investing-guide",
            "Dividend Investing: Building Wealth Through Passive Income",
            Category::PassiveIncome,
            "July 2025",
            "11 min read",
            include_str!("../assets/articles/dividend-investing-guide.html"),
        ),
        guide(
            "rental-property-investing",
            "Real Estate Investing: Your Complete Rental Property Guide",
            Category::PassiveIncome,
            "July 2025",
            "13 min read",
            include_str!("../assets/articles/rental-property-investing.html"),
        ),
        guide(
            "online-business-passive-income",
            "Building Passive Income Through Online Businesses",
            Category::PassiveIncome,
            "July 2025",
            "12 min read",
            include_str!("../assets/articles/online-business-passive-income.html"),
        ),
    ]
}
