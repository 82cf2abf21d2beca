use crate::model::Problem;

fn matches_query(problem: &Problem, query: &str, lowercased: &str, numeric: bool) -> bool {
    if problem.title.to_lowercase().contains(lowercased) {
        return true;
    }
    if format!("{}{}", problem.contest_id, problem.index)
        .to_lowercase()
        .contains(lowercased)
    {
        return true;
    }
    // digits of the rating, not a numeric comparison: 1500 matches "50"
    numeric
        && problem
            .rating
            .map_or(false, |rating| rating.to_string().contains(query))
}

fn matches_tag(problem: &Problem, tag: Option<&str>) -> bool {
    tag.map_or(true, |tag| problem.tags.iter().any(|t| t == tag))
}

/// Problems matching `query` (title, id or rating digits) and carrying
/// `selected_tag`, in their original order.
pub fn filter(problems: &[Problem], query: &str, selected_tag: Option<&str>) -> Vec<Problem> {
    let lowercased = query.to_lowercase();
    let numeric = query.parse::<i64>().is_ok();
    problems
        .iter()
        .filter(|p| query.is_empty() || matches_query(p, query, &lowercased, numeric))
        .filter(|p| matches_tag(p, selected_tag))
        .cloned()
        .collect()
}

pub fn all_tags(problems: &[Problem]) -> Vec<String> {
    let mut ret: Vec<String> = problems.iter().flat_map(|p| p.tags.iter().cloned()).collect();
    ret.sort();
    ret.dedup();
    ret
}
