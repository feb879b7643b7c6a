use crate::domain::person::{DogDisposition, Person};

/// Grouping key for people without a team assignment.
const NO_TEAM_KEY: &str = "no-team";

/// Disposition mix of one team's members
///
/// Derived fresh on every arrangement, never stored. The predicate is
/// exact: a team with no avoiders and no owners (all `LIKE`) is `Mixed`,
/// and so is a team with both avoiders and owners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeamClassification {
    /// At least one avoider and no dog owner
    AvoidOnly,
    /// At least one dog owner and no avoider
    HaveOnly,
    /// Every other mix
    Mixed,
}

/// One team's members, kept contiguous through ordering and smoothing.
struct Block {
    team_key: String,
    members: Vec<Person>,
}

/// Labels a team group by the dispositions present in it
pub fn classify_team(members: &[Person]) -> TeamClassification {
    let has_avoid = members
        .iter()
        .any(|p| p.dog_status() == DogDisposition::Avoid);
    let has_have = members
        .iter()
        .any(|p| p.dog_status() == DogDisposition::Have);

    if has_avoid && !has_have {
        TeamClassification::AvoidOnly
    } else if has_have && !has_avoid {
        TeamClassification::HaveOnly
    } else {
        TeamClassification::Mixed
    }
}

fn team_key(person: &Person) -> String {
    person
        .team()
        .map(|t| t.id().to_string())
        .unwrap_or_else(|| NO_TEAM_KEY.to_string())
}

/// Stage 1: group people by team key, first-seen key order, original
/// member order within each group.
fn partition_by_team(people: Vec<Person>) -> Vec<Block> {
    let mut groups: Vec<Block> = Vec::new();

    for person in people {
        let key = team_key(&person);
        match groups.iter_mut().find(|g| g.team_key == key) {
            Some(group) => group.members.push(person),
            None => groups.push(Block {
                team_key: key,
                members: vec![person],
            }),
        }
    }

    groups
}

/// Partitions a mixed team into avoid / like / have runs, each keeping
/// original relative order, concatenated forwards or reversed.
fn order_mixed_members(members: Vec<Person>, reversed: bool) -> Vec<Person> {
    let mut avoid = Vec::new();
    let mut like = Vec::new();
    let mut have = Vec::new();

    for person in members {
        match person.dog_status() {
            DogDisposition::Avoid => avoid.push(person),
            DogDisposition::Like => like.push(person),
            DogDisposition::Have => have.push(person),
        }
    }

    if reversed {
        have.into_iter().chain(like).chain(avoid).collect()
    } else {
        avoid.into_iter().chain(like).chain(have).collect()
    }
}

/// Stage 3: tier the blocks (avoid-only, mixed, have-only), each tier in
/// first-seen order. Mixed interiors alternate direction across the tier;
/// the toggle is one bit of state carried over the whole mixed tier, not a
/// per-team decision.
fn order_blocks(classified: Vec<(Block, TeamClassification)>) -> Vec<Block> {
    let mut avoid_tier = Vec::new();
    let mut mixed_tier = Vec::new();
    let mut have_tier = Vec::new();

    for (block, classification) in classified {
        match classification {
            TeamClassification::AvoidOnly => avoid_tier.push(block),
            TeamClassification::Mixed => mixed_tier.push(block),
            TeamClassification::HaveOnly => have_tier.push(block),
        }
    }

    let mut reversed = false;
    for block in &mut mixed_tier {
        block.members = order_mixed_members(std::mem::take(&mut block.members), reversed);
        reversed = !reversed;
    }

    let mut blocks = avoid_tier;
    blocks.append(&mut mixed_tier);
    blocks.append(&mut have_tier);
    blocks
}

fn is_clash(left: DogDisposition, right: DogDisposition) -> bool {
    matches!(
        (left, right),
        (DogDisposition::Avoid, DogDisposition::Have)
            | (DogDisposition::Have, DogDisposition::Avoid)
    )
}

/// The "already offered as a buffer" probe: a candidate key is ruled out
/// when it matches the team display name of some block's first member.
/// This is a name comparison, not a consumed-key set, so a team whose
/// name never matches a key can be offered as a buffer more than once.
fn placed_as_first(blocks: &[Block], key: &str) -> bool {
    blocks.iter().any(|block| {
        block
            .members
            .first()
            .and_then(|p| p.team())
            .map(|t| t.name() == key)
            .unwrap_or(false)
    })
}

/// Stage 4: single left-to-right scan over adjacent block pairs. On an
/// avoid/have clash the first eligible mixed team's block is relocated to
/// sit right after the left block. The scan index never rewinds, so the
/// next comparison is against the freshly placed buffer; insertion cost
/// stays linear in the number of blocks. A clash with no eligible buffer
/// is left in place.
fn smooth_boundaries(blocks: &mut Vec<Block>, mixed_keys: &[String]) {
    let mut i = 0;
    while i + 1 < blocks.len() {
        let left_last = blocks[i].members.last().map(Person::dog_status);
        let right_first = blocks[i + 1].members.first().map(Person::dog_status);

        if let (Some(left), Some(right)) = (left_last, right_first) {
            if is_clash(left, right) {
                let buffer = mixed_keys
                    .iter()
                    .find(|key| !placed_as_first(blocks, key.as_str()))
                    .cloned();

                if let Some(buffer_key) = buffer {
                    if let Some(from) = blocks.iter().position(|b| b.team_key == buffer_key) {
                        let block = blocks.remove(from);
                        // Removal shifts the left block down one slot when
                        // the buffer came from earlier in the sequence.
                        let to = if from <= i { i } else { i + 1 };
                        blocks.insert(to, block);
                    }
                }
            }
        }

        i += 1;
    }
}

/// Arranges people into a single line of desks
///
/// Teammates stay contiguous; teams of dog avoiders are pushed to one end
/// and teams of dog owners to the other, with mixed teams in between and
/// opportunistically moved to pad avoid/have boundaries. The result is a
/// permutation of the input: same people, no duplicates, no omissions.
/// Order within a non-mixed team is the input order; mixed teams are
/// re-sequenced by disposition.
///
/// Deterministic and side-effect free: the same input order always yields
/// the same output order.
///
/// # Example
/// ```
/// use deskplanner_api::domain::layout::calculate_desk_layout;
/// use deskplanner_api::domain::person::{DogDisposition, Person};
///
/// let (alice, _) = Person::new(None, "Alice".to_string(), DogDisposition::Avoid).unwrap();
/// let (bob, _) = Person::new(None, "Bob".to_string(), DogDisposition::Have).unwrap();
///
/// let arranged = calculate_desk_layout(vec![alice, bob]);
/// assert_eq!(arranged.len(), 2);
/// ```
pub fn calculate_desk_layout(people: Vec<Person>) -> Vec<Person> {
    // Stage 1: partition by team.
    let groups = partition_by_team(people);

    // Stage 2: classify each group once.
    let classified: Vec<(Block, TeamClassification)> = groups
        .into_iter()
        .map(|group| {
            let classification = classify_team(&group.members);
            (group, classification)
        })
        .collect();

    // Mixed team keys in first-seen order; smoothing draws buffers from
    // these.
    let mixed_keys: Vec<String> = classified
        .iter()
        .filter(|(_, c)| *c == TeamClassification::Mixed)
        .map(|(block, _)| block.team_key.clone())
        .collect();

    // Stage 3: order the blocks into tiers.
    let mut blocks = order_blocks(classified);

    // Stage 4: pad avoid/have boundaries with mixed blocks.
    smooth_boundaries(&mut blocks, &mixed_keys);

    // Stage 5: flatten.
    blocks
        .into_iter()
        .flat_map(|block| block.members)
        .collect()
}
