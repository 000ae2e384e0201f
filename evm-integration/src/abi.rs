use alloy::sol;

sol! {
    /// Marketplace contract surface used by the workflows.
    #[sol(rpc)]
    contract Marketplace {
        struct MarketItem {
            uint256 itemId;
            address nftContract;
            uint256 tokenId;
            address seller;
            address owner;
            uint256 price;
            bool sold;
        }

        function fetchMyNFTs() external view returns (MarketItem[] memory);
        function getListingPrice() external view returns (uint256);
        function resellItem(address nftContract, uint256 tokenId, uint256 itemId, uint256 price) external payable;
    }

    /// Asset contract surface: per-token metadata lookup and the operator
    /// grant that lets the marketplace transfer tokens.
    #[sol(rpc)]
    contract AssetToken {
        function tokenURI(uint256 tokenId) external view returns (string memory);
        function setApprovalForAll(address operator, bool approved) external;
    }
}
