//! Skill table duplication.

use skymind_types::{AgentId, SkillKind, SkillTable};

use crate::agent::{read, shared};
use crate::error::TransplantError;
use crate::transplant::SharingMode;
use crate::world::World;

/// Copy or alias `source`'s skill table onto `dest`.
pub(super) fn duplicate_skills(
    world: &mut World,
    source: AgentId,
    dest: AgentId,
    mode: SharingMode,
) -> Result<bool, TransplantError> {
    let handle = world
        .agent(source)?
        .skills
        .clone()
        .ok_or(TransplantError::missing(source, "skills"))?;

    let table = match mode {
        SharingMode::Tethered => handle,
        SharingMode::Untethered => {
            let mut fresh = SkillTable::new();
            {
                let from = read(&handle, source, "skills")?;
                for kind in SkillKind::ALL {
                    let record = from.get(kind);
                    let copy = fresh.get_mut(kind);
                    copy.level = record.level;
                    copy.passion = record.passion;
                    copy.xp_since_last_level = record.xp_since_last_level;
                    copy.xp_since_midnight = record.xp_since_midnight;
                }
            }
            fresh.apply_work_disables(&world.agent(dest)?.disabled_work());
            shared(fresh)
        }
    };
    world.agent_mut(dest)?.skills = Some(table);
    Ok(true)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::rc::Rc;

    use skymind_types::{FactionId, KindDef, NameTriple, Passion};

    use super::*;
    use crate::agent::Agent;

    fn pair() -> (World, AgentId, AgentId) {
        let mut world = World::new(FactionId::new());
        let a = world.insert(Agent::new(KindDef::colonist(), NameTriple::new("A", "A", "A")));
        let b = world.insert(Agent::new(KindDef::colonist(), NameTriple::new("B", "B", "B")));
        (world, a, b)
    }

    #[test]
    fn tethered_shares_the_table() {
        let (mut world, a, b) = pair();
        duplicate_skills(&mut world, a, b, SharingMode::Tethered).unwrap();
        let source = world.get(a).unwrap().skills.clone().unwrap();
        let dest = world.get(b).unwrap().skills.clone().unwrap();
        assert!(Rc::ptr_eq(&source, &dest));
        source.borrow_mut().set_level(SkillKind::Cooking, 12);
        assert_eq!(dest.borrow().level(SkillKind::Cooking), 12);
    }

    #[test]
    fn untethered_copies_every_field() {
        let (mut world, a, b) = pair();
        {
            let handle = world.get(a).unwrap().skills.clone().unwrap();
            let mut table = handle.borrow_mut();
            let record = table.get_mut(SkillKind::Social);
            record.level = 9;
            record.passion = Passion::Major;
            record.xp_since_last_level = 420;
            record.xp_since_midnight = 15;
        }
        duplicate_skills(&mut world, a, b, SharingMode::Untethered).unwrap();
        let source = world.get(a).unwrap().skills.clone().unwrap();
        let dest = world.get(b).unwrap().skills.clone().unwrap();
        assert!(!Rc::ptr_eq(&source, &dest));
        assert_eq!(dest.borrow().get(SkillKind::Social), source.borrow().get(SkillKind::Social));
        source.borrow_mut().set_level(SkillKind::Social, 1);
        assert_eq!(dest.borrow().level(SkillKind::Social), 9);
    }
}
