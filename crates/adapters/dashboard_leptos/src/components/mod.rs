mod stat_card;
mod stat_card_skeleton;
mod visitor_stats;

pub use stat_card::StatCard;
pub use stat_card_skeleton::StatCardSkeleton;
pub use visitor_stats::VisitorStats;
