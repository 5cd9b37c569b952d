use std::{
    cmp::Reverse,
    collections::{HashMap, HashSet},
};

use crate::api::{Comment, CommentId};

/// Rebuilds the reply tree for one document's comments.
///
/// Takes the comment list as fetched from the backend, flat or already
/// (partially) nested, and returns the top-level comments with their
/// `replies` populated recursively: top-level comments newest first,
/// replies oldest first at every depth.
///
/// A comment whose `parent_id` does not resolve within the input, or whose
/// parent chain loops back onto itself, is promoted to top level rather
/// than dropped.
pub fn build_thread(comments: Vec<Comment>) -> Vec<Comment> {
    if comments.is_empty() {
        return comments;
    }

    // The backend sometimes sends the tree pre-nested, no point rebuilding it.
    // Top level means "no parent within this input": an orphan stays in the
    // output here just like on the rebuild path.
    let ids: HashSet<CommentId> = comments.iter().map(|c| c.id).collect();
    if already_threaded(&comments, &ids) {
        return comments
            .into_iter()
            .filter(|c| !c.parent_id.is_some_and(|p| ids.contains(&p)))
            .collect();
    }

    let by_id: HashMap<CommentId, &Comment> = comments.iter().map(|c| (c.id, c)).collect();
    let mut children: HashMap<CommentId, Vec<CommentId>> = HashMap::new();
    let mut roots: Vec<CommentId> = Vec::new();
    for c in &comments {
        match c.parent_id.filter(|p| by_id.contains_key(p)) {
            Some(_) if in_parent_cycle(c, &by_id) => {
                tracing::warn!(comment = ?c.id, "comment is part of a parent cycle, promoting to top level");
                roots.push(c.id);
            }
            Some(parent) => children.entry(parent).or_default().push(c.id),
            None => {
                if c.parent_id.is_some() {
                    tracing::warn!(
                        comment = ?c.id,
                        parent = ?c.parent_id,
                        "comment parent is not in this document, promoting to top level"
                    );
                }
                roots.push(c.id);
            }
        }
    }

    if roots.is_empty() {
        // Cannot happen with the cycle promotion above, but losing comments
        // would be worse than showing them unthreaded
        tracing::warn!(
            num_comments = comments.len(),
            "threading found no top-level comment, falling back to a flat list"
        );
        return comments
            .into_iter()
            .map(|mut c| {
                c.replies = Vec::new();
                c
            })
            .collect();
    }

    let mut nodes: HashMap<CommentId, Comment> = comments
        .into_iter()
        .map(|mut c| {
            c.replies = Vec::new();
            (c.id, c)
        })
        .collect();
    let mut threaded: Vec<Comment> = roots
        .iter()
        .filter_map(|r| assemble(*r, &mut nodes, &children))
        .collect();

    threaded.sort_unstable_by_key(|c| (Reverse(c.created_at), c.id));
    for c in threaded.iter_mut() {
        sort_replies(&mut c.replies);
    }
    threaded
}

/// Looks up a comment by id anywhere in a threaded list
pub fn find_in<'a>(comments: &'a [Comment], id: &CommentId) -> Option<&'a Comment> {
    for c in comments {
        if c.id == *id {
            return Some(c);
        }
        if let Some(res) = find_in(&c.replies, id) {
            return Some(res);
        }
    }
    None
}

/// Best-effort check that the backend already nested the replies for us.
///
/// Compares the number of reply links in the flat list against the number of
/// replies reachable under the top-level comments; this is a count, not a
/// structural comparison, so a partially-nested response that accounts for
/// every link still short-circuits. Anything it lets through is rebuilt by
/// the authoritative path in [`build_thread`].
fn already_threaded(comments: &[Comment], ids: &HashSet<CommentId>) -> bool {
    if comments.iter().all(|c| c.replies.is_empty()) {
        return false;
    }
    let flat_links = comments.iter().filter(|c| c.parent_id.is_some()).count();
    let nested: usize = comments
        .iter()
        .filter(|c| !c.parent_id.is_some_and(|p| ids.contains(&p)))
        .map(count_replies)
        .sum();
    nested >= flat_links
}

fn count_replies(c: &Comment) -> usize {
    c.replies.iter().map(|r| 1 + count_replies(r)).sum()
}

/// Whether following `parent_id` links from `c` comes back to `c` itself
/// (including a comment naming itself as parent). The walk is bounded by the
/// input size so it terminates on any input.
///
/// Cycle members get promoted to top level; a comment that merely dangles
/// off someone else's cycle keeps its parent, which by then is a top-level
/// comment, so the resulting tree is still well-formed.
fn in_parent_cycle(c: &Comment, by_id: &HashMap<CommentId, &Comment>) -> bool {
    let mut cur = c;
    for _ in 0..by_id.len() {
        match cur.parent_id.and_then(|p| by_id.get(&p).copied()) {
            None => return false,
            Some(parent) => {
                if parent.id == c.id {
                    return true;
                }
                cur = parent;
            }
        }
    }
    false
}

fn assemble(
    id: CommentId,
    nodes: &mut HashMap<CommentId, Comment>,
    children: &HashMap<CommentId, Vec<CommentId>>,
) -> Option<Comment> {
    let mut node = nodes.remove(&id)?;
    if let Some(kids) = children.get(&id) {
        node.replies = kids
            .iter()
            .filter_map(|k| assemble(*k, nodes, children))
            .collect();
    }
    Some(node)
}

fn sort_replies(replies: &mut [Comment]) {
    replies.sort_unstable_by_key(|c| (c.created_at, c.id));
    for c in replies.iter_mut() {
        sort_replies(&mut c.replies);
    }
}
