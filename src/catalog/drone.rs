//! Firefighting drone scenario.
//!
//! Twelve components of an autonomous firefighting drone. Rounds 1 and 2
//! share one architecture; round 3 adds inertial navigation, sensor
//! fusion and two integrity monitors.
//!
//! | Round | Security budget | Attack limit |
//! |-------|-----------------|--------------|
//! | 1     | 6               | 3            |
//! | 2     | 8               | 5            |
//! | 3     | 5               | 6            |

use super::component::{Component, ComponentId};
use super::registry::Catalog;
use crate::core::{Role, Round, RoundMap};

const SECURITY_BUDGET: [u32; 3] = [6, 8, 5];
const ATTACK_BUDGET: [usize; 3] = [3, 5, 6];

const OBJECTIVES: &str = "Security objectives\n\n\
    1. Extinguishing is only possible in the authorized area\n\
    2. Extinguishing is only possible by the authorized method\n\n\
    Security assumptions\n\n\
    * The flight mission source is trustworthy\n\
    * No people, animals or infrastructure that could be harmed are present in the authorized areas\n";

struct Spec {
    id: u32,
    name: &'static str,
    cost: u32,
    from: u8,
    in_tcb: bool,
    attack: &'static str,
}

const COMPONENTS: [Spec; 12] = [
    Spec {
        id: 1,
        name: "1. Communications",
        cost: 2,
        from: 1,
        in_tcb: true,
        attack: "The flight mission is replaced, changing the area and method of extinguishing.",
    },
    Spec {
        id: 2,
        name: "2. Central control system",
        cost: 2,
        from: 1,
        in_tcb: true,
        attack: "The drone flies to an unauthorized area and uses an unauthorized extinguishing method.",
    },
    Spec {
        id: 3,
        name: "3. Water extinguishing",
        cost: 1,
        from: 1,
        in_tcb: true,
        attack: "The tank is emptied on a timer outside the assigned area.",
    },
    Spec {
        id: 4,
        name: "4. Ignition",
        cost: 1,
        from: 1,
        in_tcb: true,
        attack: "Ignition fires on a timer before arrival in the assigned area or after extinguishing ends.",
    },
    Spec {
        id: 5,
        name: "5. Situation monitoring",
        cost: 2,
        from: 1,
        in_tcb: false,
        attack: "The drone stops early because it was told the fire is already out.",
    },
    Spec {
        id: 6,
        name: "6. Movement control",
        cost: 2,
        from: 1,
        in_tcb: true,
        attack: "The drone flies to an unauthorized area, reports arrival, and control starts extinguishing there.",
    },
    Spec {
        id: 7,
        name: "7. Battery level monitoring",
        cost: 1,
        from: 1,
        in_tcb: true,
        attack: "Control never learns the battery is critically low; the drone falls and crashes.",
    },
    Spec {
        id: 8,
        name: "8. Navigation (satellite)",
        cost: 2,
        from: 1,
        in_tcb: true,
        attack: "Reports false coordinates and fakes arrival; the drone may start work in an unauthorized area.",
    },
    Spec {
        id: 9,
        name: "9. Navigation (inertial)",
        cost: 1,
        from: 3,
        in_tcb: true,
        attack: "Reports false coordinates and fakes arrival; the drone may start work in an unauthorized area.",
    },
    Spec {
        id: 10,
        name: "10. Sensor fusion",
        cost: 1,
        from: 3,
        in_tcb: true,
        attack: "Reports false coordinates and fakes arrival; the drone may start work in an unauthorized area.",
    },
    Spec {
        id: 11,
        name: "11. Flight mission authenticity check",
        cost: 1,
        from: 3,
        in_tcb: true,
        attack: "The flight mission is replaced; the drone works somewhere and somehow the operator never planned.",
    },
    Spec {
        id: 12,
        name: "12. Ignition circuit monitoring",
        cost: 1,
        from: 3,
        in_tcb: true,
        attack: "Circuits are switched at an arbitrary moment, enabling or disabling any extinguishing method.",
    },
];

/// Build the firefighting drone catalog.
#[must_use]
pub fn firefighting_drone() -> Catalog {
    let second = Round::FIRST.next().unwrap_or(Round::LAST);

    let mut catalog = Catalog::new(
        RoundMap::from_array(SECURITY_BUDGET),
        RoundMap::from_array(ATTACK_BUDGET),
    )
    .with_objectives(OBJECTIVES)
    .with_notice(
        Role::Architect,
        second,
        "In round 2 the security budget grows to 8.\nThe architecture does not change.",
    )
    .with_notice(
        Role::Hacker,
        second,
        "In round 2 you may pick up to 5 attacks.\nThe architecture and the attacks do not change.",
    )
    .with_notice(
        Role::Architect,
        Round::LAST,
        "In round 3 the security budget drops to 5.\n\
         The architecture has changed, study the added or modified components and how they interact.",
    )
    .with_notice(
        Role::Hacker,
        Round::LAST,
        "In round 3 you may pick up to 6 attacks.\n\
         The architecture and the attacks have changed, study the added or modified components and the new attack scenarios.",
    );

    for spec in &COMPONENTS {
        let mut component = Component::new(ComponentId::new(spec.id), spec.name, spec.cost)
            .available_from(Round::new(spec.from).unwrap_or(Round::FIRST))
            .with_attack_text(spec.attack);
        if !spec.in_tcb {
            component = component.outside_tcb();
        }
        catalog.register(component);
    }

    catalog
}
