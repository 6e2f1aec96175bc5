//! Story duplication: traits, backgrounds, title and favourite colour.

use skymind_types::{AgentId, Trait};

use crate::agent::write;
use crate::error::TransplantError;
use crate::world::World;

/// Replace `dest`'s learned traits and backgrounds with `source`'s.
///
/// Gene-sourced traits belong to the body and stay on both sides.
pub(super) fn duplicate_story(
    world: &mut World,
    source: AgentId,
    dest: AgentId,
) -> Result<bool, TransplantError> {
    let from = world
        .agent(source)?
        .story
        .as_ref()
        .ok_or(TransplantError::missing(source, "story"))?;
    let learned: Vec<Trait> = from
        .traits
        .iter()
        .filter(|t| t.source_gene.is_none())
        .cloned()
        .collect();
    let childhood = from.childhood.clone();
    let adulthood = from.adulthood.clone();
    let title = from.title.clone();
    let favorite_color = from.favorite_color;

    let target = world.agent_mut(dest)?;
    let story = target
        .story
        .as_mut()
        .ok_or(TransplantError::missing(dest, "story"))?;
    story.traits.retain(|t| t.source_gene.is_some());
    for learned_trait in learned {
        if !story.traits.iter().any(|t| t.def == learned_trait.def) {
            story.traits.push(learned_trait);
        }
    }
    story.childhood = childhood;
    story.adulthood = adulthood;
    story.title = title;
    story.favorite_color = favorite_color;
    story.recompute_disabled_work();
    let disabled = story.disabled_work.clone();

    if let Some(handle) = &target.skills {
        write(handle, dest, "skills")?.apply_work_disables(&disabled);
    }
    Ok(true)
}
