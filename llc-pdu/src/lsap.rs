use core::fmt;

sap_registry! {
    /// A link service access point, used as the DSAP or SSAP of an LLC header.
    ///
    /// Any 8-bit value is a structurally valid `Lsap`. The associated constants
    /// only name the well-known assignments, the codec never checks them.
    ///
    /// The least significant bit carries the I/G flag in a DSAP and the C/R flag
    /// in an SSAP. The constants keep the raw byte value as it appears on the wire.
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct Lsap (u8) {
        /// The null SAP.
        NULL = 0x00,
        /// Individual LLC sublayer management.
        INDIVIDUAL_LLC_SUBLAYER_MGT = 0x02,
        /// Group LLC sublayer management (group DSAP).
        GROUP_LLC_SUBLAYER_MGT = 0x03,
        /// SNA path control.
        SNA_PATH_CONTROL = 0x04,
        /// SNA path control (group DSAP).
        GROUP_SNA_PATH_CONTROL = 0x05,
        /// DoD internet protocol.
        DOD_IP = 0x06,
        /// PROWAY-LAN.
        PROWAY_LAN = 0x0E,
        /// Texas Instruments.
        TEXAS_INSTRUMENTS = 0x18,
        /// IEEE 802.1 bridge spanning tree protocol, carries BPDUs.
        BRIDGE_SPANNING_TREE = 0x42,
        /// EIA-RS 511.
        EIA_RS511 = 0x4E,
        /// ISI IP.
        ISI_IP = 0x5E,
        /// ISO 8208 (X.25 over IEEE 802.2).
        ISO_8208 = 0x7E,
        /// Xerox network systems.
        XNS = 0x80,
        /// BACnet over ethernet.
        BACNET_ETHERNET = 0x82,
        /// Nestar.
        NESTAR = 0x86,
        /// PROWAY-LAN (IEC 955).
        PROWAY_LAN_IEC955 = 0x8E,
        /// ARPANET address resolution.
        ARPANET = 0x98,
        /// RDE (route determination entity).
        RDE = 0xA6,
        /// Subnetwork access protocol extension.
        SNAP_EXTENSION = 0xAA,
        /// Banyan Vines.
        BANYAN_VINES = 0xBC,
        /// Novell NetWare.
        NOVELL_NETWARE = 0xE0,
        /// IBM NetBIOS.
        IBM_NETBIOS = 0xF0,
        /// IBM LAN management (individual).
        IBM_LAN_MANAGEMENT = 0xF4,
        /// IBM LAN management (group DSAP).
        GROUP_IBM_LAN_MANAGEMENT = 0xF5,
        /// IBM remote program load.
        IBM_REMOTE_PROGRAM_LOAD = 0xF8,
        /// Ungermann-Bass.
        UNGERMANN_BASS = 0xFA,
        /// ISO network layer protocols.
        OSI_PROTOCOLS = 0xFE,
        /// Global DSAP, addresses every SAP.
        GLOBAL = 0xFF,
    }
}

impl Lsap {
    /// Look up a well-known value by its constant name, e.g. `"SNAP_EXTENSION"`.
    pub fn from_name(name: &str) -> Option<Lsap> {
        Self::WELL_KNOWN
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, sap)| *sap)
    }

    /// The constant name of a well-known value, `None` for unassigned values.
    pub fn name(&self) -> Option<&'static str> {
        Self::WELL_KNOWN
            .iter()
            .find(|(_, sap)| sap == self)
            .map(|(n, _)| *n)
    }

    /// Whether the I/G bit marks this value as a group address when used as DSAP.
    #[inline]
    pub const fn is_group(&self) -> bool {
        self.0 & 0x01 == 0x01
    }
}

impl fmt::Display for Lsap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{}(0x{:02x})", name, self.0),
            None => write!(f, "0x{:02x}", self.0),
        }
    }
}
